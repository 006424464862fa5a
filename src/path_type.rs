//! Classification of filesystem entries, used to explain *what* was found
//! when an assertion expected something else.

use std::{io::ErrorKind, path::Path};

use_enabled_fs_module!();



/// The type of a path, e.g. a file, a symlink to a directory, etc.
///
/// See also: [`PathType::from_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,

    /// The path leads to a "bare" file, i.e. a file *and not a symlink to one*.
    BareFile,

    /// The path leads to a symlink to a file.
    SymlinkToFile,

    /// The path leads to a symlink whose destination does not exist.
    BrokenSymlink,

    /// The path leads to a "bare" directory, i.e. a directory *and not a symlink to one*.
    BareDirectory,

    /// The path leads to a symlink to a directory.
    SymlinkToDirectory,

    /// The path exists, but its type is not one of the recognized ones.
    Unrecognized,
}


impl PathType {
    /// Computes the type of a `path`.
    ///
    /// The path itself is inspected without following symbolic links,
    /// so a broken symlink is reported as [`PathType::BrokenSymlink`]
    /// and not as [`PathType::NotFound`].
    ///
    /// Returns [`std::io::Error`] if the file's metadata cannot be read.
    pub fn from_path<P>(path: P) -> Result<Self, std::io::Error>
    where
        P: AsRef<Path>,
    {
        let metadata_no_follow = match fs::symlink_metadata(path.as_ref()) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Self::NotFound),
            Err(error) => return Err(error),
        };

        if metadata_no_follow.is_file() {
            return Ok(Self::BareFile);
        } else if metadata_no_follow.is_dir() {
            return Ok(Self::BareDirectory);
        } else if !metadata_no_follow.is_symlink() {
            return Ok(Self::Unrecognized);
        }


        let metadata_with_follow = match fs::metadata(path.as_ref()) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Ok(Self::BrokenSymlink)
            }
            Err(error) => return Err(error),
        };

        if metadata_with_follow.is_file() {
            Ok(Self::SymlinkToFile)
        } else if metadata_with_follow.is_dir() {
            Ok(Self::SymlinkToDirectory)
        } else {
            Ok(Self::Unrecognized)
        }
    }

    /// Returns `true` if the path exists, be it a file, directory, or any kind of symlink.
    pub fn exists(self) -> bool {
        self != Self::NotFound
    }

    /// Returns `true` if the path leads to a file, or to a symlink to one.
    pub fn is_file_or_symlink_to_file(self) -> bool {
        matches!(self, Self::BareFile | Self::SymlinkToFile)
    }

    /// Returns `true` if the path leads to a directory, or to a symlink to one.
    pub fn is_directory_or_symlink_to_directory(self) -> bool {
        matches!(self, Self::BareDirectory | Self::SymlinkToDirectory)
    }

    /// Returns a short name of the given path type.
    ///
    /// Examples: "a file", "a symlink to a directory", ...
    ///
    pub fn to_short_name(self) -> &'static str {
        match self {
            PathType::NotFound => "non-existent",
            PathType::BareFile => "a file",
            PathType::SymlinkToFile => "a symlink to a file",
            PathType::BrokenSymlink => "a broken symlink",
            PathType::BareDirectory => "a directory",
            PathType::SymlinkToDirectory => "a symlink to a directory",
            PathType::Unrecognized => "unrecognized",
        }
    }
}
