//! In-memory file system for use case tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::services::has_hidden_component;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<State>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn add_file(&self, path: impl Into<PathBuf>, content: &[u8]) {
        self.lock().files.insert(path.into(), content.to_vec());
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.lock().files.get(path).cloned()
    }

    /// All file paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().files.keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn is_hidden_below(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .map(has_hidden_component)
        .unwrap_or(false)
}

impl FileSystem for MockFileSystem {
    fn list_files(&self, root: &Path, extension: &str) -> FsResult<Vec<PathBuf>> {
        if !self.is_dir(root) {
            return Err(FsError::NotFound(root.to_path_buf()));
        }
        let state = self.lock();
        Ok(state
            .files
            .keys()
            .filter(|p| p.starts_with(root) && *p != root)
            .filter(|p| p.extension().is_some_and(|e| e == extension))
            .filter(|p| !is_hidden_below(root, p))
            .cloned()
            .collect())
    }

    fn clear_dir(&self, dir: &Path) -> FsResult<()> {
        let mut state = self.lock();
        state.files.retain(|p, _| !(p.starts_with(dir) && p != dir));
        state.dirs.retain(|p| !(p.starts_with(dir) && p != dir));
        Ok(())
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut state = self.lock();
        if let Some(parent) = path.parent() {
            state.dirs.insert(parent.to_path_buf());
        }
        state.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let state = self.lock();
        state.dirs.iter().any(|d| d.starts_with(path))
            || state.files.keys().any(|p| p.starts_with(path) && p != path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        self.lock()
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        if !self.is_dir(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        let mut state = self.lock();
        state.files.retain(|p, _| !p.starts_with(path));
        state.dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.lock().dirs.insert(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_lists_only_matching_files_under_root() {
        let fs = MockFileSystem::new();
        fs.add_file("in/b.svg", b"");
        fs.add_file("in/a/c.svg", b"");
        fs.add_file("in/a/notes.txt", b"");
        fs.add_file("in/.cache/d.svg", b"");
        fs.add_file("other/e.svg", b"");

        let files = fs.list_files(Path::new("in"), "svg").unwrap();

        assert_eq!(
            files,
            vec![PathBuf::from("in/a/c.svg"), PathBuf::from("in/b.svg")]
        );
    }

    #[test]
    fn mock_clear_dir_keeps_siblings() {
        let fs = MockFileSystem::new();
        fs.add_file("out/1x/a.png", b"");
        fs.add_file("outside.png", b"");

        fs.clear_dir(Path::new("out")).unwrap();

        assert_eq!(fs.paths(), vec![PathBuf::from("outside.png")]);
    }
}
