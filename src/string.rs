//! Assertions on in-memory strings: comparison against files and snapshots.

use std::path::Path;

use crate::{
    error::AssertionError,
    file::read_text_file,
    snapshot::{match_snapshot, SnapshotConfig, SnapshotOutcome},
    text::{compare_text_with_file_content, TextComparison},
};



/// Fluent assertions on an in-memory string.
///
/// For panicking variants of these assertions, see [`AssertableStr`](crate::AssertableStr).
///
/// ```no_run
/// # use fs_assertions::{StrAssert, SnapshotConfig, SnapshotOutcome, AssertionError};
/// # fn main() -> Result<(), AssertionError> {
/// let rendered = "Hello, world!\n";
///
/// let outcome = StrAssert::new(rendered)
///     .matches_snapshot("./tests/snapshots/hello.txt", &SnapshotConfig::from_env())?;
///
/// if outcome == SnapshotOutcome::Created {
///     println!("new snapshot, please review it");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StrAssert<'s> {
    actual: &'s str,
}

impl<'s> StrAssert<'s> {
    /// Creates an assertion on the `actual` string.
    pub fn new(actual: &'s str) -> Self {
        Self { actual }
    }

    /// Returns the string this assertion is about.
    pub fn actual(&self) -> &'s str {
        self.actual
    }

    /// Asserts the string equals the text content of the file at `file_path`.
    ///
    /// Line separators are converted to `\n` on both sides before comparing;
    /// indentation is compared as-is.
    ///
    /// Fails with [`AssertionError::NotFound`] if the path is not a file (or a symlink to one),
    /// or with [`AssertionError::ContentMismatch`] if the texts differ. The file content is
    /// reported as the *expected* text.
    pub fn is_equal_to_file_content<P>(&self, file_path: P) -> Result<&Self, AssertionError>
    where
        P: AsRef<Path>,
    {
        let file_path = file_path.as_ref();
        let file_content = read_text_file(file_path)?;

        match compare_text_with_file_content(&file_content, self.actual) {
            TextComparison::Matches => Ok(self),
            TextComparison::Mismatch { expected, actual } => {
                Err(AssertionError::ContentMismatch {
                    path: Some(file_path.to_path_buf()),
                    expected,
                    actual,
                })
            }
        }
    }

    /// Asserts the string matches the snapshot at `snapshot_path`.
    ///
    /// - If the snapshot does not exist, it is created (along with any missing parent
    ///   directories) with the string written verbatim, and [`SnapshotOutcome::Created`]
    ///   is returned.
    /// - If it exists and matches (see [`Self::is_equal_to_file_content`] for the rules),
    ///   [`SnapshotOutcome::Matched`] is returned and nothing is written.
    /// - If it does not match and `config` enables update mode, the snapshot is overwritten
    ///   and [`SnapshotOutcome::Updated`] is returned.
    ///
    /// Otherwise fails with [`AssertionError::ContentMismatch`].
    ///
    /// Creations and updates are reported as `INFO` [`tracing`] events, which are only
    /// printed if a subscriber is installed (see the [`snapshot`](crate::snapshot) module).
    pub fn matches_snapshot<P>(
        &self,
        snapshot_path: P,
        config: &SnapshotConfig,
    ) -> Result<SnapshotOutcome, AssertionError>
    where
        P: AsRef<Path>,
    {
        match_snapshot(self.actual, snapshot_path.as_ref(), config)
    }
}
