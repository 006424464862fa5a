//! Snapshot configuration and lifecycle.
//!
//! A snapshot is a plain UTF-8 text file that holds the expected value of a string assertion.
//! Its lifecycle is:
//! - *absent*: the first assertion writes the actual value verbatim and passes ([`SnapshotOutcome::Created`]),
//! - *present*: subsequent assertions compare against it ([`SnapshotOutcome::Matched`]),
//! - on mismatch, the assertion fails, unless update mode is enabled,
//!   in which case the file is overwritten and the assertion passes ([`SnapshotOutcome::Updated`]).
//!
//! Update mode is described by [`SnapshotConfig`]. Concurrent assertions against the same
//! snapshot path are not coordinated: the last writer wins.
//!
//! Creating or updating a snapshot emits an `INFO` [`tracing`] event with the snapshot path.
//! The crate never installs a subscriber, so these notices are only visible if the test binary
//! installs one, e.g.:
//!
//! ```no_run
//! let _ = tracing_subscriber::fmt().with_test_writer().try_init();
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::{
    error::AssertionError,
    file::{path_type_of, read_text_file, write_text_file},
    paths,
    text::{compare_text_with_file_content, TextComparison},
};


/// Environment variable that opts into updating mismatched snapshots.
///
/// Accepted truthy values are `1`, `true`, `yes` and `on` (case-insensitive).
pub const UPDATE_SNAPSHOTS_ENV_VAR: &str = "UPDATE_SNAPSHOTS";

/// Environment variables whose presence signals a continuous integration environment.
///
/// Snapshots are never updated under continuous integration.
pub const CONTINUOUS_INTEGRATION_ENV_VARS: &[&str] = &[
    "CI",
    "CONTINUOUS_INTEGRATION",
    "TEAMCITY_VERSION",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "JENKINS_URL",
    "TF_BUILD",
];



/// Decides what happens when an existing snapshot does not match.
///
/// The [`Default`] configuration never updates snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapshotConfig {
    /// If `true`, a mismatched snapshot is overwritten with the actual value
    /// and the assertion passes. If `false`, the assertion fails.
    pub update_mismatched_snapshots: bool,
}

impl SnapshotConfig {
    /// A configuration that fails on mismatched snapshots.
    pub fn verify_only() -> Self {
        Self {
            update_mismatched_snapshots: false,
        }
    }

    /// A configuration that overwrites mismatched snapshots.
    pub fn update_mismatched() -> Self {
        Self {
            update_mismatched_snapshots: true,
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// See [`Self::from_env_lookup`].
    pub fn from_env() -> Self {
        Self::from_env_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from environment variables provided by `lookup`.
    ///
    /// Update mode is enabled only if [`UPDATE_SNAPSHOTS_ENV_VAR`] is truthy
    /// *and* none of the [`CONTINUOUS_INTEGRATION_ENV_VARS`] signal continuous integration.
    pub fn from_env_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let opted_in = lookup(UPDATE_SNAPSHOTS_ENV_VAR)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        let under_continuous_integration = is_running_under_ci(&lookup);

        if opted_in && under_continuous_integration {
            debug!(
                "ignoring {} under continuous integration",
                UPDATE_SNAPSHOTS_ENV_VAR
            );
        }

        Self {
            update_mismatched_snapshots: opted_in && !under_continuous_integration,
        }
    }
}


/// Returns `true` if any of the [`CONTINUOUS_INTEGRATION_ENV_VARS`], as provided by `lookup`,
/// is set to a non-empty value other than `false` or `0`.
pub fn is_running_under_ci<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    CONTINUOUS_INTEGRATION_ENV_VARS.iter().any(|&name| {
        lookup(name)
            .map(|value| {
                let value = value.trim();
                !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
            })
            .unwrap_or(false)
    })
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();

    ["1", "true", "yes", "on"]
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}



/// What a successful snapshot assertion did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// The snapshot did not exist and was created with the actual value.
    Created,

    /// The snapshot exists and matches the actual value. Nothing was written.
    Matched,

    /// The snapshot did not match and was overwritten with the actual value (update mode).
    Updated,
}


/// Compares `actual` against the snapshot at `snapshot_path`, creating or updating it as needed.
pub(crate) fn match_snapshot(
    actual: &str,
    snapshot_path: &Path,
    config: &SnapshotConfig,
) -> Result<SnapshotOutcome, AssertionError> {
    let path_type = path_type_of(snapshot_path)?;

    if !path_type.exists() {
        write_text_file(snapshot_path, actual)?;

        info!(
            snapshot = %paths::displayable(snapshot_path).display(),
            "wrote a new snapshot"
        );

        return Ok(SnapshotOutcome::Created);
    }


    let snapshot_content = read_text_file(snapshot_path)?;

    match compare_text_with_file_content(&snapshot_content, actual) {
        TextComparison::Matches => {
            debug!(
                snapshot = %paths::displayable(snapshot_path).display(),
                "snapshot matches"
            );

            Ok(SnapshotOutcome::Matched)
        }
        TextComparison::Mismatch { .. } if config.update_mismatched_snapshots => {
            write_text_file(snapshot_path, actual)?;

            info!(
                snapshot = %paths::displayable(snapshot_path).display(),
                "updated a mismatched snapshot"
            );

            Ok(SnapshotOutcome::Updated)
        }
        TextComparison::Mismatch {
            expected,
            actual: normalized_actual,
        } => Err(AssertionError::ContentMismatch {
            path: Some(snapshot_path.to_path_buf()),
            expected,
            actual: normalized_actual,
        }),
    }
}
