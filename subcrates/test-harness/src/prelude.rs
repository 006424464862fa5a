pub use fs_assertions::{AsPath, AssertablePath, AssertableStr};

pub use crate::assert_matches;
pub use crate::error::TestResult;
pub use crate::tree_framework::FileSystemHarness;
pub use crate::ManageablePath;
