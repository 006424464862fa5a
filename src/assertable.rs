use std::path::Path;

use crate::{
    error::AssertionError,
    path::{ExpectedChild, PathAssert},
    snapshot::{SnapshotConfig, SnapshotOutcome},
    string::StrAssert,
};



/// Provides a `&Path` view of `self`.
pub trait AsPath {
    /// Returns `self` as a [`Path`].
    fn as_path(&self) -> &Path;
}


/// Panicking path assertions, for direct use in tests.
///
/// Implemented for everything that implements [`AsPath`]
/// (which includes all [`AsRef<Path>`] types).
///
/// Each method panics with the [`Display`](std::fmt::Display) output of the corresponding
/// [`AssertionError`], at the caller's location. See [`PathAssert`] for the
/// `Result`-returning variants and a precise description of each assertion.
pub trait AssertablePath {
    /// Asserts the path exists on the filesystem, be it a file, directory, symlink, etc.
    fn assert_exists(&self);

    /// Asserts the path does not exist on the filesystem (symlinks are not followed).
    ///
    /// On failure, the message includes the file's content if it is smaller than 16 KiB.
    fn assert_does_not_exist(&self);

    /// Asserts the path points to a file (or a symlink to one) whose text content
    /// equals `expected`, after removing the common indentation of `expected`
    /// and converting the file's line separators to `\n`.
    fn assert_has_content(&self, expected: &str);

    /// Asserts the path points to a directory (or a symlink to one) whose immediate
    /// children are exactly `expected_children`, in any order.
    ///
    /// Strings match by path suffix, paths match exactly (see [`ExpectedChild`]).
    fn assert_has_children<I>(&self, expected_children: I)
    where
        I: IntoIterator,
        I::Item: Into<ExpectedChild>;
}


/// Panicking string assertions, for direct use in tests.
///
/// Implemented for everything that implements [`AsRef<str>`].
///
/// See [`StrAssert`] for the `Result`-returning variants.
pub trait AssertableStr {
    /// Asserts the string equals the text content of the file at `file_path`
    /// (line separators are converted to `\n` on both sides).
    fn assert_equals_file_content<P>(&self, file_path: P)
    where
        P: AsRef<Path>;

    /// Asserts the string matches the snapshot at `snapshot_path`, creating the snapshot
    /// if it does not exist.
    ///
    /// Update mode is read from the environment, see [`SnapshotConfig::from_env`].
    fn assert_matches_snapshot<P>(&self, snapshot_path: P) -> SnapshotOutcome
    where
        P: AsRef<Path>;

    /// Asserts the string matches the snapshot at `snapshot_path`, creating the snapshot
    /// if it does not exist, and updating it on mismatch if `config` allows it.
    fn assert_matches_snapshot_with_config<P>(
        &self,
        snapshot_path: P,
        config: &SnapshotConfig,
    ) -> SnapshotOutcome
    where
        P: AsRef<Path>;
}



/// Panics with the error's message, reporting the location of the original caller.
#[track_caller]
fn unwrap_assertion<T>(result: Result<T, AssertionError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", error),
    }
}


/// Blanket implements `AsPath` for all `AsRef<Path>`s.
impl<P> AsPath for P
where
    P: AsRef<Path> + ?Sized,
{
    fn as_path(&self) -> &Path {
        self.as_ref()
    }
}


/// Blanket implementation of [`AssertablePath`] for all items
/// that implement [`AsPath`].
impl<A> AssertablePath for A
where
    A: AsPath + ?Sized,
{
    #[track_caller]
    fn assert_exists(&self) {
        unwrap_assertion(PathAssert::new(self.as_path()).exists());
    }

    #[track_caller]
    fn assert_does_not_exist(&self) {
        unwrap_assertion(PathAssert::new(self.as_path()).does_not_exist());
    }

    #[track_caller]
    fn assert_has_content(&self, expected: &str) {
        unwrap_assertion(PathAssert::new(self.as_path()).has_content(expected));
    }

    #[track_caller]
    fn assert_has_children<I>(&self, expected_children: I)
    where
        I: IntoIterator,
        I::Item: Into<ExpectedChild>,
    {
        unwrap_assertion(PathAssert::new(self.as_path()).has_children(expected_children));
    }
}


/// Blanket implementation of [`AssertableStr`] for all `AsRef<str>`s.
impl<S> AssertableStr for S
where
    S: AsRef<str> + ?Sized,
{
    #[track_caller]
    fn assert_equals_file_content<P>(&self, file_path: P)
    where
        P: AsRef<Path>,
    {
        unwrap_assertion(StrAssert::new(self.as_ref()).is_equal_to_file_content(file_path));
    }

    #[track_caller]
    fn assert_matches_snapshot<P>(&self, snapshot_path: P) -> SnapshotOutcome
    where
        P: AsRef<Path>,
    {
        self.assert_matches_snapshot_with_config(snapshot_path, &SnapshotConfig::from_env())
    }

    #[track_caller]
    fn assert_matches_snapshot_with_config<P>(
        &self,
        snapshot_path: P,
        config: &SnapshotConfig,
    ) -> SnapshotOutcome
    where
        P: AsRef<Path>,
    {
        unwrap_assertion(StrAssert::new(self.as_ref()).matches_snapshot(snapshot_path, config))
    }
}
