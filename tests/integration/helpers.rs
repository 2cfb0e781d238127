//! Shared fixtures for the workspace integration tests.
//!
//! Each test binary compiles this module separately and uses a different
//! subset of it.
#![allow(dead_code)]

use srcfmt::TransformError;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory removed on drop.
///
/// Temporary directory names start with a dot, which the formatter treats as
/// hidden, so the usable root is a plain `work` directory one level down.
pub struct TestDir {
    _temp: TempDir,
    root: PathBuf,
}

impl TestDir {
    pub fn new() -> io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let root = temp.path().join("work");
        fs::create_dir(&root)?;
        Ok(Self { _temp: temp, root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn mkdir(&self, relative: &str) -> io::Result<PathBuf> {
        let path = self.join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    pub fn write_file(&self, relative: &str, content: &[u8]) -> io::Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn read_file(&self, relative: &str) -> io::Result<Vec<u8>> {
        fs::read(self.join(relative))
    }

    pub fn read_text(&self, relative: &str) -> String {
        String::from_utf8(self.read_file(relative).expect("read file")).expect("utf-8 content")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.join(relative).exists()
    }

    /// Every file below the root, relative and sorted.
    pub fn files(&self) -> Vec<String> {
        let mut files = Vec::new();
        collect_files(&self.root, &self.root, &mut files);
        files.sort();
        files
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).expect("read dir") {
        let entry = entry.expect("dir entry");
        let path = entry.path();
        if entry.file_type().expect("file type").is_dir() {
            collect_files(root, &path, out);
        } else {
            let relative = path.strip_prefix(root).expect("under root");
            out.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}

/// Declarative set of files created in one go.
#[derive(Default)]
pub struct FileTree {
    files: Vec<(String, Vec<u8>)>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_file(&mut self, relative: &str, content: &str) -> &mut Self {
        self.files
            .push((relative.to_owned(), content.as_bytes().to_vec()));
        self
    }

    pub fn create_in(&self, dir: &TestDir) -> io::Result<()> {
        for (relative, content) in &self.files {
            dir.write_file(relative, content)?;
        }
        Ok(())
    }
}

/// Removes trailing spaces and tabs from every line. Idempotent.
pub fn trim_trailing_whitespace(_path: &Path, content: &[u8]) -> Result<Vec<u8>, TransformError> {
    let text = std::str::from_utf8(content)?;
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        out.push_str(body.trim_end_matches([' ', '\t']));
        out.push_str(newline);
    }
    Ok(out.into_bytes())
}

/// Wraps a transformation and records every path it is called with.
pub struct Recording<F> {
    inner: F,
    seen: RefCell<Vec<PathBuf>>,
}

impl<F> Recording<F>
where
    F: Fn(&Path, &[u8]) -> Result<Vec<u8>, TransformError>,
{
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Paths seen so far, relative to `root` when they live below it.
    pub fn seen_relative(&self, root: &Path) -> Vec<String> {
        self.seen
            .borrow()
            .iter()
            .map(|path| {
                path.strip_prefix(root)
                    .unwrap_or(path)
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl<F> srcfmt::Transformer for Recording<F>
where
    F: Fn(&Path, &[u8]) -> Result<Vec<u8>, TransformError>,
{
    fn transform(&self, path: &Path, content: &[u8]) -> Result<Vec<u8>, TransformError> {
        self.seen.borrow_mut().push(path.to_path_buf());
        (self.inner)(path, content)
    }
}
