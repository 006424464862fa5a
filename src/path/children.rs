use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};

use crate::paths;


/// An entry that is expected to be an immediate child of a directory.
///
/// See [`PathAssert::has_children`] for how each kind is matched.
///
///
/// [`PathAssert::has_children`]: crate::PathAssert::has_children
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpectedChild {
    /// Matches a child whose full path *ends with* this name,
    /// compared component by component (see [`Path::ends_with`]).
    ///
    /// `"b.txt"` matches `<directory>/b.txt`, and `"sub/b.txt"` matches it
    /// only if the directory itself is named `sub`.
    ///
    /// Created from `&str` and `String`.
    Name(String),

    /// Matches only a child with exactly this full path.
    ///
    /// The directory listing yields paths joined onto the asserted directory path,
    /// so a relative directory path produces relative child paths.
    ///
    /// Created from `&Path` and `PathBuf`.
    Path(PathBuf),
}

impl ExpectedChild {
    /// Returns `true` if the given full child path satisfies this expectation.
    ///
    /// An empty name matches nothing.
    pub fn matches(&self, child_path: &Path) -> bool {
        match self {
            ExpectedChild::Name(name) => !name.is_empty() && child_path.ends_with(name),
            ExpectedChild::Path(path) => child_path == path.as_path(),
        }
    }
}

impl Display for ExpectedChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedChild::Name(name) => write!(f, "\"{}\" (name)", name),
            ExpectedChild::Path(path) => write!(
                f,
                "\"{}\" (exact path)",
                paths::displayable(path).display()
            ),
        }
    }
}

impl From<&str> for ExpectedChild {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for ExpectedChild {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<&String> for ExpectedChild {
    fn from(value: &String) -> Self {
        Self::Name(value.clone())
    }
}

impl From<&Path> for ExpectedChild {
    fn from(value: &Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<PathBuf> for ExpectedChild {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

impl From<&PathBuf> for ExpectedChild {
    fn from(value: &PathBuf) -> Self {
        Self::Path(value.clone())
    }
}



/// Result of matching the listed children of a directory against the expected ones.
#[derive(Debug, Default)]
pub(crate) struct ChildrenMatch {
    pub(crate) missing: Vec<ExpectedChild>,
    pub(crate) unexpected: Vec<PathBuf>,
    pub(crate) duplicated: Vec<ExpectedChild>,
}

impl ChildrenMatch {
    /// Matches `child_paths` against `expected_children`, ignoring order.
    ///
    /// Children and expectations are paired one-to-one: every child must be claimed
    /// by exactly one expectation, and every expectation must claim exactly one child.
    /// Expectations that appear more than once are reported as duplicated, and
    /// only their first occurrence takes part in the pairing.
    pub(crate) fn compute(child_paths: &[PathBuf], expected_children: &[ExpectedChild]) -> Self {
        let mut unique_expectations: Vec<&ExpectedChild> = Vec::new();
        let mut duplicated: Vec<ExpectedChild> = Vec::new();

        for expected_child in expected_children {
            if !unique_expectations.contains(&expected_child) {
                unique_expectations.push(expected_child);
            } else if !duplicated.contains(expected_child) {
                duplicated.push(expected_child.clone());
            }
        }


        let candidates: Vec<Vec<usize>> = unique_expectations
            .iter()
            .map(|expected_child| {
                child_paths
                    .iter()
                    .enumerate()
                    .filter(|(_, child_path)| expected_child.matches(child_path))
                    .map(|(child_index, _)| child_index)
                    .collect()
            })
            .collect();

        // For each child, the index of the expectation it is paired with.
        let mut pairings: Vec<Option<usize>> = vec![None; child_paths.len()];

        for expectation_index in 0..unique_expectations.len() {
            let mut visited_children = vec![false; child_paths.len()];

            pair_expectation(
                expectation_index,
                &candidates,
                &mut pairings,
                &mut visited_children,
            );
        }


        let missing = unique_expectations
            .iter()
            .enumerate()
            .filter(|(expectation_index, _)| !pairings.contains(&Some(*expectation_index)))
            .map(|(_, expected_child)| (*expected_child).clone())
            .collect();

        let unexpected = child_paths
            .iter()
            .zip(pairings.iter())
            .filter(|(_, pairing)| pairing.is_none())
            .map(|(child_path, _)| child_path.clone())
            .collect();


        Self {
            missing,
            unexpected,
            duplicated,
        }
    }

    pub(crate) fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.duplicated.is_empty()
    }
}



/// Tries to pair the expectation at `expectation_index` with one of its candidate children,
/// moving previously paired expectations to other candidates when that frees a child
/// (an augmenting path search).
///
/// Returns `true` if the expectation was paired.
fn pair_expectation(
    expectation_index: usize,
    candidates: &[Vec<usize>],
    pairings: &mut [Option<usize>],
    visited_children: &mut [bool],
) -> bool {
    for &child_index in &candidates[expectation_index] {
        if visited_children[child_index] {
            continue;
        }
        visited_children[child_index] = true;

        let child_is_free = match pairings[child_index] {
            None => true,
            Some(paired_expectation_index) => pair_expectation(
                paired_expectation_index,
                candidates,
                pairings,
                visited_children,
            ),
        };

        if child_is_free {
            pairings[child_index] = Some(expectation_index);
            return true;
        }
    }

    false
}
