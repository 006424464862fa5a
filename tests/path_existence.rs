use fs_assertions::{error::AssertionError, path_type::PathType, PathAssert};
use fs_assertions_test_harness::{
    prelude::*,
    seeded_binary_data,
    trees::{EmptyTree, SimpleTree, HELLO_WORLD_TXT_CONTENT, LARGE_BIN_SIZE},
};



#[test]
fn does_not_exist_passes_for_missing_paths() {
    let harness = EmptyTree::initialize();

    let missing_file_path = harness.child_path("missing.txt");
    let missing_nested_path = harness.child_path("missing/nested/file.txt");

    PathAssert::new(&missing_file_path).does_not_exist().unwrap();
    PathAssert::new(&missing_nested_path).does_not_exist().unwrap();

    missing_file_path.assert_does_not_exist();


    harness.destroy();
}



#[test]
fn does_not_exist_includes_content_of_small_files() {
    let harness = SimpleTree::initialize();

    let error = PathAssert::new(&harness.hello_world_txt)
        .does_not_exist()
        .unwrap_err();

    assert_matches!(
        &error,
        AssertionError::ExistenceViolation {
            found: PathType::BareFile,
            content: Some(content),
            size_bytes: Some(size_bytes),
            ..
        } if content == HELLO_WORLD_TXT_CONTENT
            && *size_bytes == HELLO_WORLD_TXT_CONTENT.len() as u64
    );

    let message = error.to_string();
    assert!(message.contains("not to exist"));
    assert!(message.contains(HELLO_WORLD_TXT_CONTENT.trim_end()));


    harness.destroy();
}



#[test]
fn does_not_exist_omits_content_of_large_files() {
    let harness = SimpleTree::initialize();

    let error = PathAssert::new(&harness.large_bin)
        .does_not_exist()
        .unwrap_err();

    assert_matches!(
        &error,
        AssertionError::ExistenceViolation {
            content: None,
            size_bytes: Some(size_bytes),
            ..
        } if *size_bytes == LARGE_BIN_SIZE as u64
            && *size_bytes == harness.large_bin.size_in_bytes()
    );

    assert!(error.to_string().contains("content not shown"));


    harness.destroy();
}



#[test]
fn content_preview_limit_is_exclusive_at_16_kib() {
    let harness = EmptyTree::initialize();

    let just_below_limit = harness.child_path("below.txt");
    just_below_limit.assert_not_exists_and_create_file_with_content("a".repeat(1024 * 16 - 1));

    let at_limit = harness.child_path("at.txt");
    at_limit.assert_not_exists_and_create_file_with_content("a".repeat(1024 * 16));


    assert_matches!(
        PathAssert::new(&just_below_limit).does_not_exist(),
        Err(AssertionError::ExistenceViolation {
            content: Some(_),
            ..
        })
    );

    assert_matches!(
        PathAssert::new(&at_limit).does_not_exist(),
        Err(AssertionError::ExistenceViolation {
            content: None,
            size_bytes: Some(16384),
            ..
        })
    );


    harness.destroy();
}



#[test]
fn does_not_exist_fails_for_directories_without_content() {
    let harness = SimpleTree::initialize();

    assert_matches!(
        PathAssert::new(&harness.sub).does_not_exist(),
        Err(AssertionError::ExistenceViolation {
            found: PathType::BareDirectory,
            content: None,
            size_bytes: None,
            ..
        })
    );


    harness.destroy();
}



#[test]
fn does_not_exist_shows_non_utf8_content_lossily() {
    let harness = EmptyTree::initialize();

    let binary_file_path = harness.child_path("small.bin");
    binary_file_path.assert_not_exists_and_create_file_with_content(seeded_binary_data(
        512,
        2903489125012,
    ));

    assert_matches!(
        PathAssert::new(&binary_file_path).does_not_exist(),
        Err(AssertionError::ExistenceViolation {
            content: Some(_),
            size_bytes: Some(512),
            ..
        })
    );


    harness.destroy();
}



#[cfg(unix)]
#[test]
fn does_not_exist_does_not_follow_symlinks() {
    let harness = EmptyTree::initialize();

    let broken_symlink_path = harness.child_path("broken-link.txt");
    broken_symlink_path.symlink_to_file(harness.child_path("missing-destination.txt"));

    assert_matches!(
        PathAssert::new(&broken_symlink_path).does_not_exist(),
        Err(AssertionError::ExistenceViolation {
            found: PathType::BrokenSymlink,
            content: None,
            ..
        })
    );

    broken_symlink_path.assert_exists();


    harness.destroy();
}



#[cfg(unix)]
#[test]
fn does_not_exist_previews_content_behind_file_symlinks() {
    let harness = SimpleTree::initialize();

    let symlink_path = harness.child_path("link-to-hello.txt");
    symlink_path.symlink_to_file(&harness.hello_world_txt);

    assert_matches!(
        PathAssert::new(&symlink_path).does_not_exist(),
        Err(AssertionError::ExistenceViolation {
            found: PathType::SymlinkToFile,
            content: Some(content),
            ..
        }) if content == HELLO_WORLD_TXT_CONTENT
    );


    harness.destroy();
}



#[test]
#[should_panic(expected = "not to exist")]
fn assert_does_not_exist_panics_for_existing_file() {
    let harness = SimpleTree::initialize();

    harness.hello_world_txt.assert_does_not_exist();
}



#[test]
fn exists_fails_with_not_found_for_missing_paths() {
    let harness = EmptyTree::initialize();

    assert_matches!(
        PathAssert::new(&harness.child_path("missing")).exists(),
        Err(AssertionError::NotFound {
            found: PathType::NotFound,
            ..
        })
    );

    harness.assert_exists();


    harness.destroy();
}
