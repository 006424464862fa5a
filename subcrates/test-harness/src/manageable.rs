use std::{
    fs::{self, OpenOptions},
    io::prelude::Write,
    path::Path,
};

use fs_assertions::{AsPath, AssertablePath};



pub trait ManageablePath {
    /// This method will write `content` into a new file at `self`.
    /// Additionally, if the parent directory is missing, it will be created.
    ///
    ///
    /// # Panic
    /// This will panic if the path exists, or if the file or its parent
    /// directory cannot be created.
    ///
    /// This is fine only because we *should fail on errors anyway*,
    /// since this is part of `fs-assertions`' testing harness.
    fn assert_not_exists_and_create_file_with_content<C>(&self, content: C)
    where
        C: AsRef<[u8]>;

    /// This method will create an empty directory at `self`.
    /// Additionally, if the parent directory is missing, it will be created.
    ///
    ///
    /// # Panic
    /// This will panic if the path exists, or if directory cannot be created.
    fn assert_not_exists_and_create_empty_directory(&self);

    /// Given a `destination_file_path`, this method will create a symlink at `self`
    /// that points to the destination path. The destination does not need to exist.
    ///
    ///
    /// # Panic
    /// This will panic if `self` exists or if the symlink cannot be created.
    fn symlink_to_file<P>(&self, destination_file_path: P)
    where
        P: AsRef<Path>;

    /// Overwrites the file at `self` with `content`, creating it if needed.
    fn overwrite_with_content<C>(&self, content: C)
    where
        C: AsRef<[u8]>;

    /// Reads the entire file at `self` into a `String`.
    fn read_text(&self) -> String;

    /// Returns the size of the file at `self`, in bytes.
    fn size_in_bytes(&self) -> u64;
}



#[track_caller]
fn symlink_to_file(source_path: &Path, target_path: &Path) {
    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_file(target_path, source_path)
            .expect("failed to create file symlink");
    }

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target_path, source_path)
            .expect("failed to create file symlink");
    }

    #[cfg(not(any(windows, unix)))]
    {
        compile_error!(
            "fs-assertions' test harness supports only the following values of target_family: \
            unix and windows (notably, wasm is unsupported)."
        );
    }
}

#[track_caller]
fn create_missing_parent_directory(path: &Path) {
    if let Some(parent_directory_path) = path.parent() {
        fs::create_dir_all(parent_directory_path)
            .expect("failed to create missing parent directory");
    }
}


/// Blanket implementation of [`ManageablePath`] for all items
/// that implement [`AsPath`].
impl<A> ManageablePath for A
where
    A: AsPath + ?Sized,
{
    #[track_caller]
    fn assert_not_exists_and_create_file_with_content<C>(&self, content: C)
    where
        C: AsRef<[u8]>,
    {
        self.as_path().assert_does_not_exist();
        create_missing_parent_directory(self.as_path());

        let mut file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(self.as_path())
            .expect("failed to open file");

        file.write_all(content.as_ref())
            .expect("failed to write content to file");
        file.flush().expect("failed to flush file");
    }

    #[track_caller]
    fn assert_not_exists_and_create_empty_directory(&self) {
        self.as_path().assert_does_not_exist();

        fs::create_dir_all(self.as_path()).expect("failed to create empty directory");
    }

    #[track_caller]
    fn symlink_to_file<P>(&self, destination_file_path: P)
    where
        P: AsRef<Path>,
    {
        self.as_path().assert_does_not_exist();

        symlink_to_file(self.as_path(), destination_file_path.as_ref());

        self.as_path().assert_exists();
    }

    #[track_caller]
    fn overwrite_with_content<C>(&self, content: C)
    where
        C: AsRef<[u8]>,
    {
        fs::write(self.as_path(), content).expect("failed to overwrite file");
    }

    #[track_caller]
    fn read_text(&self) -> String {
        fs::read_to_string(self.as_path()).expect("failed to read file contents")
    }

    #[track_caller]
    fn size_in_bytes(&self) -> u64 {
        fs::metadata(self.as_path())
            .expect("failed to read file metadata")
            .len()
    }
}
