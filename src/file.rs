use std::path::Path;

use crate::{error::AssertionError, path_type::PathType, CONTENT_PREVIEW_MAXIMUM_SIZE};

use_enabled_fs_module!();



/// Computes the [`PathType`] of `path`, mapping IO errors into [`AssertionError`].
pub(crate) fn path_type_of(path: &Path) -> Result<PathType, AssertionError> {
    PathType::from_path(path).map_err(|error| AssertionError::UnableToAccessPath {
        path: path.to_path_buf(),
        error,
    })
}


/// Given a `&Path`, validate that it leads to a file (or a symlink to one)
/// and read it as UTF-8 text.
pub(crate) fn read_text_file(file_path: &Path) -> Result<String, AssertionError> {
    let path_type = path_type_of(file_path)?;

    if !path_type.is_file_or_symlink_to_file() {
        return Err(AssertionError::NotFound {
            path: file_path.to_path_buf(),
            found: path_type,
        });
    }

    fs::read_to_string(file_path).map_err(|error| AssertionError::UnableToReadFile {
        path: file_path.to_path_buf(),
        error,
    })
}


/// Writes `content` to `file_path` verbatim, creating any missing parent directories
/// and replacing the file if it exists.
pub(crate) fn write_text_file(file_path: &Path, content: &str) -> Result<(), AssertionError> {
    if let Some(parent_directory_path) = file_path.parent() {
        if !parent_directory_path.as_os_str().is_empty() {
            fs::create_dir_all(parent_directory_path).map_err(|error| {
                AssertionError::UnableToWriteSnapshot {
                    snapshot_path: file_path.to_path_buf(),
                    error,
                }
            })?;
        }
    }

    fs::write(file_path, content).map_err(|error| AssertionError::UnableToWriteSnapshot {
        snapshot_path: file_path.to_path_buf(),
        error,
    })
}


/// A best-effort capture of a file's size and (for small files) its content,
/// used to make [`AssertionError::ExistenceViolation`] more helpful.
pub(crate) struct ContentPreview {
    pub(crate) content: Option<String>,
    pub(crate) size_bytes: Option<u64>,
}

impl ContentPreview {
    /// Captures a preview of the file at `path`.
    ///
    /// Symlinks to files are followed. IO errors are not reported, since the
    /// preview only exists to decorate an assertion failure that is already happening.
    pub(crate) fn capture(path: &Path, path_type: PathType) -> Self {
        if !path_type.is_file_or_symlink_to_file() {
            return Self::empty();
        }

        let Ok(metadata) = fs::metadata(path) else {
            return Self::empty();
        };

        let size_bytes = metadata.len();

        if size_bytes >= CONTENT_PREVIEW_MAXIMUM_SIZE {
            return Self {
                content: None,
                size_bytes: Some(size_bytes),
            };
        }

        let content = fs::read(path)
            .ok()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());

        Self {
            content,
            size_bytes: Some(size_bytes),
        }
    }

    fn empty() -> Self {
        Self {
            content: None,
            size_bytes: None,
        }
    }
}
