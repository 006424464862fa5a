//! Testing harness for `fs-assertions`: temporary file trees, seeded data
//! and small filesystem helpers used by the integration tests.

pub mod error;
mod manageable;
pub mod prelude;
mod seeded_data;
pub mod tree_framework;
pub mod trees;

pub use assert_matches::assert_matches;
pub use manageable::ManageablePath;
pub use seeded_data::{generate_seeded_text_lines, seeded_binary_data};
