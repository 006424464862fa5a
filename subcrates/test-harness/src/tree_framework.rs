use std::path::{Path, PathBuf};

use fs_assertions::AsPath;
use tempfile::TempDir;

use crate::ManageablePath;


pub trait FileSystemHarness: AsPath {
    /// Initializes the entire filesystem tree harness.
    /// This means setting up a temporary directory and
    /// potentially initializing any directories and files inside,
    /// depending on the given tree definition.
    fn initialize() -> Self;

    /// Consume `self` and remove the entire testing temporary directory.
    fn destroy(self);

    /// Obtain a custom sub-path, by providing a relative `sub_path`.
    fn child_path<P>(&self, sub_path: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        self.as_path().join(sub_path)
    }
}



/// Sets up a new, empty temporary directory.
#[track_caller]
pub(crate) fn initialize_temporary_directory() -> TempDir {
    tempfile::tempdir().expect("failed to initialize temporary directory")
}

/// Removes the temporary directory, if it still exists.
#[track_caller]
pub(crate) fn destroy_temporary_directory(temporary_directory: TempDir) {
    if temporary_directory.path().exists() {
        temporary_directory
            .close()
            .expect("failed to destroy filesystem harness directory");
    } else {
        println!(
            "Temporary directory \"{}\" doesn't exist, no need to clean up.",
            temporary_directory.path().display()
        );
    }
}

/// Creates a file with the given string content at `relative_path` inside `root_path`,
/// returning the full path to the file.
#[track_caller]
pub(crate) fn initialize_file_with_string(root_path: &Path, relative_path: &str, content: &str) -> PathBuf {
    let file_path = root_path.join(relative_path);
    file_path.assert_not_exists_and_create_file_with_content(content);

    file_path
}

/// Creates an empty directory at `relative_path` inside `root_path`,
/// returning the full path to the directory.
#[track_caller]
pub(crate) fn initialize_empty_directory(root_path: &Path, relative_path: &str) -> PathBuf {
    let directory_path = root_path.join(relative_path);
    directory_path.assert_not_exists_and_create_empty_directory();

    directory_path
}
