//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use gosvc_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GosvcError, GosvcResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GosvcResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GosvcResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> GosvcResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GosvcError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_bytes_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a/b");
        let file = nested.join("c.txt");

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, b"first").unwrap();
        fs.write_file(&file, b"second").unwrap();

        assert_eq!(std::fs::read(&file).unwrap(), b"second");
        assert!(fs.exists(&file));
    }

    #[test]
    fn write_without_parent_reports_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("missing/c.txt");

        let err = LocalFilesystem::new().write_file(&file, b"x").unwrap_err();

        match err {
            GosvcError::Application(ApplicationError::Filesystem { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = dir.path().join("svc");
        fs.create_dir_all(&root.join("x/y")).unwrap();
        fs.write_file(&root.join("x/y/z"), b"z").unwrap();

        fs.remove_dir_all(&root).unwrap();

        assert!(!fs.exists(&root));
    }
}
