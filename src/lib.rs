//! Fluent file, directory and snapshot assertions for tests, built on top of [`std::fs`].
//!
//!
//! # Main features
//! - assert that a path does not exist (with a preview of the unexpected file's content),
//! - assert that a file has some exact text content, ignoring line separator style and
//!   the common indentation of the expected literal,
//! - assert the exact set of immediate children of a directory, and
//! - compare strings against files or against *snapshots* that are created on first use
//!   and can be updated in place when the expected output changes.
//!
//! <br>
//!
//! Each assertion exists in two flavours:
//! - a `Result`-returning method on the [`PathAssert`] and [`StrAssert`] facades,
//!   for when the [`AssertionError`] itself needs to be inspected, and
//! - a panicking method on the [`AssertablePath`] and [`AssertableStr`] traits,
//!   which are implemented for everything that is [`AsRef<Path>`](std::path::Path)
//!   or [`AsRef<str>`] respectively.
//!
//!
//! <br>
//!
//! # Feature flags
//! The following feature flags enable optional functionality:
//! - `dunce` (*enabled by default*): enables the optional [`dunce`](../dunce/index.html) support:
//!   Windows' UNC paths are shown without their `\\?\` prefix in assertion failures
//!   if they can be represented using the usual type of path (e.g. `\\?\C:\foo -> C:\foo`).
//!   This crate only has an effect when compiling for Windows targets.
//! - `fs-err` (*disabled by default*): enables the optional [`fs-err`](../fs_err/index.html) support,
//!   which enables more helpful error messages for underlying IO errors.
//! - `miette` (*disabled by default*): derives [`miette::Diagnostic`](../miette/derive.Diagnostic.html)
//!   on [`AssertionError`].
//!
//!
//! <br>
//!
//! # Snapshots
//! [`StrAssert::matches_snapshot`] writes the actual value to the snapshot file if it does not
//! exist yet. Otherwise, the snapshot file is treated as the expected value. When the
//! `UPDATE_SNAPSHOTS` environment variable is set to a truthy value and the tests are not
//! running under continuous integration, mismatched snapshots are overwritten instead of failing.
//! See [`SnapshotConfig`] for details.
//!
//! Written snapshots are reported through [`tracing`](https://docs.rs/tracing) at the `INFO` level;
//! install a subscriber (e.g. `tracing-subscriber`) in your tests to see them.
//!
//!
//! <br>
//!
//! # Examples
//!
//! Asserting on a file that was produced by the code under test:
//! ```no_run
//! use fs_assertions::{AssertablePath, AssertableStr};
//!
//! let output_directory = std::path::Path::new("./target/report");
//!
//! output_directory.join("summary.txt").assert_has_content(
//!     "
//!     total: 3
//!     failed: 0
//!     ",
//! );
//!
//! output_directory.assert_has_children(["summary.txt", "details.json"]);
//! output_directory.join("report.lock").assert_does_not_exist();
//!
//! let rendered = "total: 3\nfailed: 0";
//! rendered.assert_matches_snapshot("./tests/snapshots/summary.txt");
//! ```
//!
//! Inspecting the failure instead of panicking:
//! ```no_run
//! # use fs_assertions::error::AssertionError;
//! use fs_assertions::StrAssert;
//!
//! let assertion = StrAssert::new("hello");
//! let result = assertion.is_equal_to_file_content("./hello.txt");
//!
//! if let Err(AssertionError::ContentMismatch { expected, actual, .. }) = result {
//!     println!("expected {expected:?}, got {actual:?}");
//! }
//! ```

#![warn(missing_docs)]


/// 16 KiB
const CONTENT_PREVIEW_MAXIMUM_SIZE: u64 = 1024 * 16;


#[macro_use]
mod macros;

mod assertable;
pub mod error;
mod file;
pub mod path;
pub mod path_type;
mod paths;
pub mod snapshot;
pub mod string;
pub mod text;

pub use assertable::{AsPath, AssertablePath, AssertableStr};
pub use error::AssertionError;
pub use path::{ExpectedChild, PathAssert};
pub use snapshot::{SnapshotConfig, SnapshotOutcome};
pub use string::StrAssert;
