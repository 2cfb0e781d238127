//! Integration test helper infrastructure tests.
//!
//! Validates that the test utilities work correctly.

mod integration;

use integration::helpers::*;
use std::path::Path;

#[test]
fn test_dir_creates_and_cleans_up() {
    let path_copy;
    {
        let test_dir = TestDir::new().expect("create test dir");
        path_copy = test_dir.path().to_path_buf();
        assert!(path_copy.exists(), "test dir should exist");
    }
    assert!(!path_copy.exists(), "test dir should be cleaned up");
}

#[test]
fn test_dir_root_is_not_hidden() {
    let test_dir = TestDir::new().expect("create test dir");
    let name = test_dir.path().file_name().expect("name");
    assert!(!name.to_string_lossy().starts_with('.'));
}

#[test]
fn file_tree_creates_files() {
    let test_dir = TestDir::new().expect("create test dir");
    let mut tree = FileTree::new();
    tree.text_file("a.txt", "content a")
        .text_file("subdir/b.txt", "content b");
    tree.create_in(&test_dir).expect("create tree");

    assert!(test_dir.exists("a.txt"));
    assert_eq!(test_dir.read_text("subdir/b.txt"), "content b");
    assert_eq!(test_dir.files(), ["a.txt", "subdir/b.txt"]);
}

#[test]
fn trim_trailing_whitespace_is_idempotent() {
    let once = trim_trailing_whitespace(Path::new(""), b"a \t\nb\n c  ").expect("first");
    assert_eq!(once, b"a\nb\n c");
    let twice = trim_trailing_whitespace(Path::new(""), &once).expect("second");
    assert_eq!(once, twice);
}
