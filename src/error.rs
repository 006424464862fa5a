//! Assertion failures and the errors that can prevent an assertion from being evaluated.
//!
//! All assertions in this crate report their failures through [`AssertionError`].
//! The panicking assertion traits ([`AssertablePath`] and [`AssertableStr`]) panic
//! with the [`Display`](std::fmt::Display) output of these errors.
//!
//!
//! [`AssertablePath`]: crate::AssertablePath
//! [`AssertableStr`]: crate::AssertableStr

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{path::ExpectedChild, path_type::PathType, paths, text};


/// An assertion failure, or an error that prevented the assertion from being evaluated.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum AssertionError {
    /// The path was expected not to exist, but it does.
    ///
    /// Existence is checked without following symbolic links,
    /// meaning a broken symlink also causes this error.
    #[error(
        "{}",
        existence_violation_message(.path, .found, .content, .size_bytes)
    )]
    ExistenceViolation {
        /// The path that exists.
        path: PathBuf,

        /// What was found at the path.
        found: PathType,

        /// Textual content of the file, if the path leads to a file (or a symlink to one)
        /// that is smaller than 16 KiB.
        ///
        /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
        content: Option<String>,

        /// Size of the file in bytes, if the path leads to a file (or a symlink to one).
        size_bytes: Option<u64>,
    },

    /// The path was expected to be a regular file (or a symlink to one),
    /// but it does not exist or is something else.
    #[error(
        "expected a file, but the path is {}: {}",
        .found.to_short_name(),
        paths::displayable(.path).display()
    )]
    NotFound {
        /// The path that is not a file.
        path: PathBuf,

        /// What was found at the path instead.
        found: PathType,
    },

    /// The path was expected to be a directory (or a symlink to one),
    /// but it does not exist or is something else.
    #[error(
        "expected a directory, but the path is {}: {}",
        .found.to_short_name(),
        paths::displayable(.path).display()
    )]
    NotDirectory {
        /// The path that is not a directory.
        path: PathBuf,

        /// What was found at the path instead.
        found: PathType,
    },

    /// Two texts were expected to be equal after normalization, but they differ.
    ///
    /// Both texts are stored in their normalized form, ready to be diffed.
    #[error(
        "{}",
        content_mismatch_message(.path, .expected, .actual)
    )]
    ContentMismatch {
        /// The file the expected text was read from, if any.
        path: Option<PathBuf>,

        /// Expected text (after normalization).
        expected: String,

        /// Actual text (after normalization).
        actual: String,
    },

    /// The immediate children of a directory do not match the expected set.
    #[error(
        "{}",
        set_mismatch_message(.directory_path, .missing, .unexpected, .duplicated)
    )]
    SetMismatch {
        /// Directory whose children were listed.
        directory_path: PathBuf,

        /// Expected children that could not be paired with an entry of their own.
        missing: Vec<ExpectedChild>,

        /// Directory entries that were not paired with any expected child.
        unexpected: Vec<PathBuf>,

        /// Expected children that were provided more than once.
        duplicated: Vec<ExpectedChild>,
    },

    /// The path could not be accessed, for example due to missing permissions.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to access path: {}", paths::displayable(.path).display())]
    UnableToAccessPath {
        /// The path that could not be accessed.
        path: PathBuf,

        /// Underlying IO error describing why the path could not be accessed.
        #[source]
        error: std::io::Error,
    },

    /// The file exists, but could not be read as UTF-8 text.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error
    /// (e.g. [`std::io::ErrorKind::InvalidData`] for files that are not valid UTF-8).
    #[error("unable to read file as text: {}", paths::displayable(.path).display())]
    UnableToReadFile {
        /// The file that could not be read.
        path: PathBuf,

        /// Underlying IO error describing why the file could not be read.
        #[source]
        error: std::io::Error,
    },

    /// The directory exists, but its entries could not be listed.
    #[error("unable to read directory: {}", paths::displayable(.directory_path).display())]
    UnableToReadDirectory {
        /// The directory that could not be read.
        directory_path: PathBuf,

        /// Underlying IO error describing why the directory could not be read.
        #[source]
        error: std::io::Error,
    },

    /// A snapshot file (or one of its missing parent directories) could not be written.
    #[error("unable to write snapshot file: {}", paths::displayable(.snapshot_path).display())]
    UnableToWriteSnapshot {
        /// The snapshot file that could not be written.
        snapshot_path: PathBuf,

        /// Underlying IO error describing why the snapshot could not be written.
        #[source]
        error: std::io::Error,
    },
}

impl AssertionError {
    /// Returns the `(expected, actual)` texts of a [`AssertionError::ContentMismatch`],
    /// for use by reporters that render their own diffs.
    ///
    /// Returns `None` for all other variants.
    pub fn expected_and_actual(&self) -> Option<(&str, &str)> {
        match self {
            Self::ContentMismatch {
                expected, actual, ..
            } => Some((expected.as_str(), actual.as_str())),
            _ => None,
        }
    }
}



fn existence_violation_message(
    path: &Path,
    found: &PathType,
    content: &Option<String>,
    size_bytes: &Option<u64>,
) -> String {
    let mut message = format!(
        "expected path:\n\t{}\nnot to exist, but it is {}",
        paths::displayable(path).display(),
        found.to_short_name()
    );

    match (content, *size_bytes) {
        (Some(content), _) => {
            message.push_str(", content:\n\n");
            message.push_str(content);
            message.push('\n');
        }
        (None, Some(size_bytes)) => {
            message.push_str(&format!(
                " of {} (content not shown)",
                humansize::format_size(size_bytes, humansize::BINARY)
            ));
        }
        (None, None) => {}
    }

    message
}


fn content_mismatch_message(path: &Option<PathBuf>, expected: &str, actual: &str) -> String {
    let header = match path {
        Some(path) => format!(
            "content does not match file: {}",
            paths::displayable(path).display()
        ),
        None => "content does not match".to_string(),
    };

    format!(
        "{}\n--- expected\n+++ actual\n{}",
        header,
        text::render_line_diff(expected, actual)
    )
}


fn set_mismatch_message(
    directory_path: &Path,
    missing: &[ExpectedChild],
    unexpected: &[PathBuf],
    duplicated: &[ExpectedChild],
) -> String {
    let mut message = format!(
        "children of directory do not match: {}",
        paths::displayable(directory_path).display()
    );

    if !missing.is_empty() {
        message.push_str("\n  expected, but not found:");
        for expected_child in missing {
            message.push_str(&format!("\n    {}", expected_child));
        }
    }

    if !unexpected.is_empty() {
        message.push_str("\n  found, but not expected:");
        for child_path in unexpected {
            message.push_str(&format!(
                "\n    {}",
                paths::displayable(child_path).display()
            ));
        }
    }

    if !duplicated.is_empty() {
        message.push_str("\n  expected more than once:");
        for expected_child in duplicated {
            message.push_str(&format!("\n    {}", expected_child));
        }
    }

    message
}
