//! Lexical path normalisation shared by the configuration and exclusion layers.

use std::path::{Component, Path, PathBuf};

/// Returns the shortest lexically equivalent form of `path`.
///
/// Repeated separators and `.` components are dropped, `..` removes the
/// preceding normal component, and `..` directly below the root is discarded.
/// The filesystem is never consulted, so symlinks are not resolved. An empty
/// result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}
