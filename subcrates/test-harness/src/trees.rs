//! Filesystem trees used by the integration tests.
//!
//! Upon calling [`FileSystemHarness::initialize`], each tree sets up a temporary directory
//! and creates its files and directories inside. When it's dropped or when
//! [`FileSystemHarness::destroy`] is called, the temporary directory is removed.

use std::path::{Path, PathBuf};

use fs_assertions::AssertablePath;
use tempfile::TempDir;

use crate::{
    seeded_binary_data,
    tree_framework::{
        destroy_temporary_directory,
        initialize_empty_directory,
        initialize_file_with_string,
        initialize_temporary_directory,
        FileSystemHarness,
    },
    ManageablePath,
};


/// An empty temporary directory.
///
/// The full file tree is as follows:
/// ```md
/// .
/// ```
pub struct EmptyTree {
    temporary_directory: TempDir,
}

impl FileSystemHarness for EmptyTree {
    #[track_caller]
    fn initialize() -> Self {
        let temporary_directory = initialize_temporary_directory();
        temporary_directory.path().assert_has_children(Vec::<&str>::new());

        Self {
            temporary_directory,
        }
    }

    #[track_caller]
    fn destroy(self) {
        destroy_temporary_directory(self.temporary_directory);
    }
}

impl AsRef<Path> for EmptyTree {
    fn as_ref(&self) -> &Path {
        self.temporary_directory.path()
    }
}



/// Content of `./hello-world.txt` in [`SimpleTree`].
pub const HELLO_WORLD_TXT_CONTENT: &str = "Hello world!\n";

/// Content of `./windows-lines.txt` in [`SimpleTree`].
pub const WINDOWS_LINES_TXT_CONTENT: &str = "first line\r\nsecond line\r\n  indented line";

/// Size of `./large.bin` in [`SimpleTree`] (20 KiB, above the 16 KiB preview limit).
pub const LARGE_BIN_SIZE: usize = 1024 * 20;

/// Content of `./sub/a.txt` in [`SimpleTree`].
pub const SUB_A_TXT_CONTENT: &str = "alpha";

/// Content of `./sub/b.txt` in [`SimpleTree`].
pub const SUB_B_TXT_CONTENT: &str = "beta";


/// A small tree with text files, a large binary file and a subdirectory.
///
/// The full file tree is as follows:
/// ```md
/// .
/// ├── hello-world.txt    ("Hello world!\n")
/// ├── windows-lines.txt  (three lines, `\r\n`-separated)
/// ├── large.bin          (20 KiB of seeded random data)
/// └── sub
///     ├── a.txt          ("alpha")
///     └── b.txt          ("beta")
/// ```
pub struct SimpleTree {
    temporary_directory: TempDir,

    /// `./hello-world.txt`
    pub hello_world_txt: PathBuf,

    /// `./windows-lines.txt`
    pub windows_lines_txt: PathBuf,

    /// `./large.bin`
    pub large_bin: PathBuf,

    /// `./sub`
    pub sub: SubDirectory,
}

/// The `./sub` directory of [`SimpleTree`].
pub struct SubDirectory {
    directory_path: PathBuf,

    /// `./sub/a.txt`
    pub a_txt: PathBuf,

    /// `./sub/b.txt`
    pub b_txt: PathBuf,
}

impl AsRef<Path> for SubDirectory {
    fn as_ref(&self) -> &Path {
        &self.directory_path
    }
}

impl FileSystemHarness for SimpleTree {
    #[track_caller]
    fn initialize() -> Self {
        let temporary_directory = initialize_temporary_directory();
        let root_path = temporary_directory.path();

        let hello_world_txt =
            initialize_file_with_string(root_path, "hello-world.txt", HELLO_WORLD_TXT_CONTENT);

        let windows_lines_txt = initialize_file_with_string(
            root_path,
            "windows-lines.txt",
            WINDOWS_LINES_TXT_CONTENT,
        );

        let large_bin = root_path.join("large.bin");
        large_bin.assert_not_exists_and_create_file_with_content(seeded_binary_data(
            LARGE_BIN_SIZE,
            39581913123,
        ));

        let sub_directory_path = initialize_empty_directory(root_path, "sub");
        let a_txt = initialize_file_with_string(root_path, "sub/a.txt", SUB_A_TXT_CONTENT);
        let b_txt = initialize_file_with_string(root_path, "sub/b.txt", SUB_B_TXT_CONTENT);


        root_path.assert_has_children([
            "hello-world.txt",
            "windows-lines.txt",
            "large.bin",
            "sub",
        ]);

        Self {
            temporary_directory,
            hello_world_txt,
            windows_lines_txt,
            large_bin,
            sub: SubDirectory {
                directory_path: sub_directory_path,
                a_txt,
                b_txt,
            },
        }
    }

    #[track_caller]
    fn destroy(self) {
        destroy_temporary_directory(self.temporary_directory);
    }
}

impl AsRef<Path> for SimpleTree {
    fn as_ref(&self) -> &Path {
        self.temporary_directory.path()
    }
}
