//! Assertions on filesystem paths: existence, file content and directory children.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    error::AssertionError,
    file::{path_type_of, read_text_file, ContentPreview},
    paths,
    text::{compare_text, TextComparison},
};

mod children;

pub use children::ExpectedChild;
use children::ChildrenMatch;

use_enabled_fs_module!();



/// Fluent assertions on a filesystem path.
///
/// Every assertion returns `Ok(&self)` on success, so multiple assertions
/// can be chained with `?`. For panicking variants of these assertions,
/// see [`AssertablePath`](crate::AssertablePath).
///
/// ```no_run
/// # use fs_assertions::{PathAssert, AssertionError};
/// # fn main() -> Result<(), AssertionError> {
/// PathAssert::new("./output")
///     .has_children(["result.txt"])?;
///
/// PathAssert::new("./output/result.txt")
///     .has_content("done")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PathAssert<'p> {
    path: &'p Path,
}

impl<'p> PathAssert<'p> {
    /// Creates an assertion on `path`.
    pub fn new<P>(path: &'p P) -> Self
    where
        P: AsRef<Path> + ?Sized,
    {
        Self {
            path: path.as_ref(),
        }
    }

    /// Returns the path this assertion is about.
    pub fn path(&self) -> &'p Path {
        self.path
    }

    /// Asserts the path exists, be it a file, directory, or any kind of symlink
    /// (broken symlinks included).
    ///
    /// Fails with [`AssertionError::NotFound`].
    pub fn exists(&self) -> Result<&Self, AssertionError> {
        let path_type = path_type_of(self.path)?;

        if !path_type.exists() {
            return Err(AssertionError::NotFound {
                path: self.path.to_path_buf(),
                found: path_type,
            });
        }

        Ok(self)
    }

    /// Asserts the path does not exist.
    ///
    /// The check does not follow symbolic links: a symlink, even a broken one,
    /// counts as an existing path.
    ///
    /// Fails with [`AssertionError::ExistenceViolation`]. If the path leads to a file
    /// (or a symlink to one) smaller than 16 KiB, the error includes its content.
    pub fn does_not_exist(&self) -> Result<&Self, AssertionError> {
        let path_type = path_type_of(self.path)?;

        if !path_type.exists() {
            return Ok(self);
        }

        let preview = ContentPreview::capture(self.path, path_type);

        Err(AssertionError::ExistenceViolation {
            path: self.path.to_path_buf(),
            found: path_type,
            content: preview.content,
            size_bytes: preview.size_bytes,
        })
    }

    /// Asserts the path leads to a file (or a symlink to one) whose text content
    /// equals `expected`.
    ///
    /// The common indentation of `expected` is removed before comparing
    /// (see [`trim_indent`](crate::text::trim_indent)), and the line separators
    /// of the file content are converted to `\n`.
    ///
    /// Fails with [`AssertionError::NotFound`] if the path is not a file,
    /// or with [`AssertionError::ContentMismatch`] if the content differs.
    pub fn has_content(&self, expected: &str) -> Result<&Self, AssertionError> {
        self.is_equal_to(expected)
    }

    /// Same as [`Self::has_content`].
    pub fn is_equal_to(&self, expected: &str) -> Result<&Self, AssertionError> {
        let file_content = read_text_file(self.path)?;

        match compare_text(expected, &file_content) {
            TextComparison::Matches => Ok(self),
            TextComparison::Mismatch { expected, actual } => {
                Err(AssertionError::ContentMismatch {
                    path: Some(self.path.to_path_buf()),
                    expected,
                    actual,
                })
            }
        }
    }

    /// Asserts the path leads to a directory (or a symlink to one) whose
    /// immediate children are exactly `expected_children`, in any order.
    ///
    /// Each expected child is an [`ExpectedChild`]:
    /// - strings (`&str`, `String`) match any child whose full path *ends with* them,
    ///   compared component by component, and
    /// - paths (`&Path`, `PathBuf`) must be equal to a child's full path.
    ///
    /// Each child satisfies at most one expectation, so `["b.txt", "sub/b.txt"]` requires
    /// two distinct children. An empty name matches nothing.
    ///
    /// Fails with [`AssertionError::NotDirectory`] if the path is not a directory,
    /// or with [`AssertionError::SetMismatch`] if a child is missing or unexpected,
    /// or if the same expected child was provided more than once.
    pub fn has_children<I>(&self, expected_children: I) -> Result<&Self, AssertionError>
    where
        I: IntoIterator,
        I::Item: Into<ExpectedChild>,
    {
        let path_type = path_type_of(self.path)?;

        if !path_type.is_directory_or_symlink_to_directory() {
            return Err(AssertionError::NotDirectory {
                path: self.path.to_path_buf(),
                found: path_type,
            });
        }


        let expected_children: Vec<ExpectedChild> =
            expected_children.into_iter().map(Into::into).collect();
        let child_paths = self.list_children()?;

        debug!(
            directory = %paths::displayable(self.path).display(),
            children = child_paths.len(),
            expected = expected_children.len(),
            "comparing directory children"
        );


        let children_match = ChildrenMatch::compute(&child_paths, &expected_children);

        if !children_match.is_exact() {
            return Err(AssertionError::SetMismatch {
                directory_path: self.path.to_path_buf(),
                missing: children_match.missing,
                unexpected: children_match.unexpected,
                duplicated: children_match.duplicated,
            });
        }

        Ok(self)
    }

    /// Lists the immediate children of the directory, sorted by path.
    fn list_children(&self) -> Result<Vec<PathBuf>, AssertionError> {
        let map_read_error = |error| AssertionError::UnableToReadDirectory {
            directory_path: self.path.to_path_buf(),
            error,
        };

        let mut child_paths = fs::read_dir(self.path)
            .map_err(map_read_error)?
            .map(|entry_result| entry_result.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_read_error)?;

        child_paths.sort();

        Ok(child_paths)
    }
}
