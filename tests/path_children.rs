use std::path::Path;

use fs_assertions::{error::AssertionError, path_type::PathType, ExpectedChild, PathAssert};
use fs_assertions_test_harness::{
    prelude::*,
    trees::{EmptyTree, SimpleTree},
};



#[test]
fn has_children_matches_names_regardless_of_order() {
    let harness = SimpleTree::initialize();

    harness.sub.assert_has_children(["b.txt", "a.txt"]);
    harness.sub.assert_has_children(["a.txt", "b.txt"]);

    harness.assert_has_children([
        "sub",
        "large.bin",
        "windows-lines.txt",
        "hello-world.txt",
    ]);


    harness.destroy();
}



#[test]
fn has_children_matches_names_as_path_suffixes() {
    let harness = SimpleTree::initialize();

    // The asserted directory is itself named "sub", so "sub/b.txt" is a suffix of its child.
    PathAssert::new(&harness.sub)
        .has_children(["a.txt", "sub/b.txt"])
        .unwrap();

    assert_matches!(
        PathAssert::new(&harness.sub).has_children(["a.txt", "other/b.txt"]),
        Err(AssertionError::SetMismatch { .. })
    );


    harness.destroy();
}



#[test]
fn has_children_matches_paths_exactly() {
    let harness = SimpleTree::initialize();

    PathAssert::new(&harness.sub)
        .has_children([
            ExpectedChild::from(harness.sub.a_txt.as_path()),
            ExpectedChild::from("b.txt"),
        ])
        .unwrap();

    let error = PathAssert::new(&harness.sub)
        .has_children([Path::new("a.txt"), Path::new("b.txt")])
        .unwrap_err();

    assert_matches!(
        error,
        AssertionError::SetMismatch { missing, unexpected, .. }
            if missing.len() == 2 && unexpected.len() == 2
    );


    harness.destroy();
}



#[test]
fn has_children_reports_missing_child() {
    let harness = SimpleTree::initialize();

    let error = PathAssert::new(&harness.sub)
        .has_children(["a.txt", "b.txt", "c.txt"])
        .unwrap_err();

    assert_matches!(
        &error,
        AssertionError::SetMismatch { missing, unexpected, duplicated, .. }
            if missing == &vec![ExpectedChild::from("c.txt")]
                && unexpected.is_empty()
                && duplicated.is_empty()
    );

    assert!(error.to_string().contains("expected, but not found"));


    harness.destroy();
}



#[test]
fn has_children_reports_unexpected_child() {
    let harness = SimpleTree::initialize();

    let error = PathAssert::new(&harness.sub)
        .has_children(["a.txt"])
        .unwrap_err();

    assert_matches!(
        &error,
        AssertionError::SetMismatch { missing, unexpected, .. }
            if missing.is_empty() && unexpected == &vec![harness.sub.b_txt.clone()]
    );

    assert!(error.to_string().contains("found, but not expected"));


    harness.destroy();
}



#[test]
fn has_children_requires_a_distinct_child_per_expectation() {
    let harness = SimpleTree::initialize();

    let error = PathAssert::new(&harness.sub)
        .has_children(["a.txt", "b.txt", "sub/b.txt"])
        .unwrap_err();

    assert_matches!(
        &error,
        AssertionError::SetMismatch { missing, unexpected, duplicated, .. }
            if missing.len() == 1 && unexpected.is_empty() && duplicated.is_empty()
    );


    let second_b_txt = harness.child_path("sub/nested/b.txt");
    second_b_txt.assert_not_exists_and_create_file_with_content("beta again");

    PathAssert::new(&harness.sub)
        .has_children(["a.txt", "sub/b.txt", "nested"])
        .unwrap();


    harness.destroy();
}



#[test]
fn has_children_never_matches_empty_names() {
    let harness = SimpleTree::initialize();

    assert_matches!(
        PathAssert::new(&harness.sub).has_children([""]),
        Err(AssertionError::SetMismatch { missing, unexpected, .. })
            if missing == vec![ExpectedChild::from("")] && unexpected.len() == 2
    );

    assert_matches!(
        PathAssert::new(&harness).has_children(["sub", ""]),
        Err(AssertionError::SetMismatch { missing, unexpected, .. })
            if missing.len() == 1 && unexpected.len() == 3
    );


    harness.destroy();
}



#[test]
fn has_children_reports_duplicated_expectations() {
    let harness = SimpleTree::initialize();

    assert_matches!(
        PathAssert::new(&harness.sub).has_children(["a.txt", "b.txt", "a.txt"]),
        Err(AssertionError::SetMismatch { duplicated, .. })
            if duplicated == vec![ExpectedChild::from("a.txt")]
    );


    harness.destroy();
}



#[test]
fn has_children_of_empty_directory() {
    let harness = EmptyTree::initialize();

    harness.assert_has_children(Vec::<String>::new());

    assert_matches!(
        PathAssert::new(&harness).has_children(["anything"]),
        Err(AssertionError::SetMismatch { .. })
    );


    harness.destroy();
}



#[test]
fn has_children_does_not_recurse() {
    let harness = SimpleTree::initialize();

    assert_matches!(
        PathAssert::new(&harness).has_children([
            "sub",
            "sub/a.txt",
            "sub/b.txt",
            "large.bin",
            "windows-lines.txt",
            "hello-world.txt",
        ]),
        Err(AssertionError::SetMismatch { missing, .. }) if missing.len() == 2
    );


    harness.destroy();
}



#[test]
fn has_children_fails_for_files_and_missing_paths() {
    let harness = SimpleTree::initialize();

    assert_matches!(
        PathAssert::new(&harness.hello_world_txt).has_children(["a.txt"]),
        Err(AssertionError::NotDirectory {
            found: PathType::BareFile,
            ..
        })
    );

    assert_matches!(
        PathAssert::new(&harness.child_path("missing")).has_children(["a.txt"]),
        Err(AssertionError::NotDirectory {
            found: PathType::NotFound,
            ..
        })
    );


    harness.destroy();
}



#[test]
#[should_panic(expected = "children of directory do not match")]
fn assert_has_children_panics_on_mismatch() {
    let harness = SimpleTree::initialize();

    harness.sub.assert_has_children(["a.txt"]);
}
