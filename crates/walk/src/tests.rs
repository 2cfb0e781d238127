use super::*;
use std::fs;
use std::path::{Path, PathBuf};

fn relative(root: &Path, entry: &WalkEntry) -> PathBuf {
    entry
        .path()
        .strip_prefix(root)
        .expect("entry below root")
        .to_path_buf()
}

fn collect_relative_paths(root: &Path, walker: Walker) -> Vec<PathBuf> {
    walker
        .map(|entry| relative(root, &entry.expect("walker entry")))
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

#[test]
fn walk_errors_when_root_missing() {
    let builder = WalkBuilder::new("/nonexistent/path/for/walker");
    let error = match builder.build() {
        Ok(_) => panic!("missing root should fail"),
        Err(error) => error,
    };
    assert_eq!(error.operation(), WalkOperation::InspectRoot);
    assert_eq!(error.path(), Path::new("/nonexistent/path/for/walker"));
}

#[test]
fn walk_single_file_emits_root_entry() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("file.txt");
    fs::write(&file, b"contents").expect("write");

    let mut walker = WalkBuilder::new(&file).build().expect("build walker");
    let entry = walker.next().expect("entry").expect("entry ok");
    assert!(entry.is_file());
    assert_eq!(entry.path(), file);
    assert!(walker.next().is_none());
}

#[test]
fn walk_directory_yields_deterministic_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    fs::create_dir(root.join("b")).expect("dir b");
    fs::create_dir(root.join("a")).expect("dir a");
    fs::write(root.join("a/inner.txt"), b"data").expect("write inner");
    fs::write(root.join("c.txt"), b"data").expect("write file");

    let walker = WalkBuilder::new(&root).build().expect("build walker");
    assert_eq!(
        collect_relative_paths(&root, walker),
        vec![
            PathBuf::from("a"),
            PathBuf::from("a/inner.txt"),
            PathBuf::from("b"),
            PathBuf::from("c.txt"),
        ]
    );
}

#[test]
fn walk_paths_keep_the_root_spelling() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("pkg")).expect("create tree");
    fs::write(root.join("pkg/main.go"), b"package main").expect("write");

    let paths: Vec<PathBuf> = WalkBuilder::new(&root)
        .build()
        .expect("build walker")
        .map(|entry| entry.expect("entry").path().to_path_buf())
        .collect();
    assert_eq!(
        paths,
        vec![root.clone(), root.join("pkg"), root.join("pkg/main.go")]
    );
}

#[test]
fn skip_current_dir_prunes_subtree_and_continues_with_siblings() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("a/deep")).expect("create a");
    fs::create_dir_all(root.join("b")).expect("create b");
    fs::write(root.join("a/deep/x.txt"), b"x").expect("write x");
    fs::write(root.join("b/y.txt"), b"y").expect("write y");
    fs::write(root.join("z.txt"), b"z").expect("write z");

    let mut walker = WalkBuilder::new(&root)
        .include_root(false)
        .build()
        .expect("build walker");
    let mut seen = Vec::new();
    while let Some(entry) = walker.next() {
        let path = relative(&root, &entry.expect("entry"));
        if path == Path::new("a") {
            walker.skip_current_dir();
        }
        seen.push(path);
    }

    assert_eq!(
        seen,
        vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("b/y.txt"),
            PathBuf::from("z.txt"),
        ]
    );
}

#[test]
fn skip_current_dir_on_root_yields_nothing_else() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    fs::write(root.join("file.txt"), b"data").expect("write");

    let mut walker = WalkBuilder::new(&root).build().expect("build walker");
    let entry = walker.next().expect("root").expect("root ok");
    assert_eq!(entry.path(), root);
    assert!(entry.is_dir());
    walker.skip_current_dir();
    assert!(walker.next().is_none());
}

#[test]
fn skip_current_dir_after_file_is_a_no_op() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("b")).expect("create b");
    fs::write(root.join("a.txt"), b"a").expect("write a");
    fs::write(root.join("b/c.txt"), b"c").expect("write c");

    let mut walker = WalkBuilder::new(&root)
        .include_root(false)
        .build()
        .expect("build walker");
    let first = walker.next().expect("first").expect("first ok");
    assert_eq!(first.path(), root.join("a.txt"));
    walker.skip_current_dir();

    assert_eq!(
        collect_relative_paths(&root, walker),
        vec![PathBuf::from("b"), PathBuf::from("b/c.txt")]
    );
}

#[cfg(unix)]
#[test]
fn pruned_directory_is_never_read() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    let locked = root.join("locked");
    fs::create_dir_all(&locked).expect("create locked");
    fs::write(root.join("open.txt"), b"data").expect("write");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

    let mut walker = WalkBuilder::new(&root)
        .include_root(false)
        .build()
        .expect("build walker");
    let mut seen = Vec::new();
    while let Some(entry) = walker.next() {
        let path = relative(&root, &entry.expect("pruned directory must not be listed"));
        if path == Path::new("locked") {
            walker.skip_current_dir();
        }
        seen.push(path);
    }

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
    assert_eq!(seen, vec![PathBuf::from("locked"), PathBuf::from("open.txt")]);
}

#[cfg(unix)]
#[test]
fn unreadable_directory_ends_the_walk_with_its_path() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    let locked = root.join("locked");
    fs::create_dir_all(&locked).expect("create locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

    // Privileged users can list the directory regardless of its mode.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
        return;
    }

    let mut walker = WalkBuilder::new(&root)
        .include_root(false)
        .build()
        .expect("build walker");
    let entry = walker.next().expect("locked").expect("locked ok");
    assert_eq!(entry.path(), locked);
    let error = walker.next().expect("error").expect_err("listing fails");
    assert_eq!(error.operation(), WalkOperation::ListDirectory);
    assert_eq!(error.path(), locked);
    assert!(walker.next().is_none());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
}

#[cfg(unix)]
#[test]
fn walk_does_not_follow_symlinks() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    let target = temp.path().join("target");
    fs::create_dir(&root).expect("create root");
    fs::create_dir(&target).expect("create target");
    fs::write(target.join("inner.txt"), b"data").expect("write inner");
    symlink(&target, root.join("link")).expect("create symlink");

    let mut walker = WalkBuilder::new(&root)
        .include_root(false)
        .build()
        .expect("build walker");
    let entry = walker.next().expect("link entry").expect("link ok");
    assert_eq!(entry.path(), root.join("link"));
    assert!(!entry.is_dir());
    assert!(!entry.is_file());
    assert!(walker.next().is_none());
}

#[test]
fn include_root_false_starts_with_children() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    fs::write(root.join("only.txt"), b"data").expect("write");

    let mut walker = WalkBuilder::new(&root)
        .include_root(false)
        .build()
        .expect("build walker");
    let entry = walker.next().expect("entry").expect("entry ok");
    assert_eq!(entry.path(), root.join("only.txt"));
    assert!(walker.next().is_none());
}
