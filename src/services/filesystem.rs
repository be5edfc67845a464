//! File system access used by the adaptors.
//!
//! Directory listing order decides profile and device order in the output, so
//! it goes through the [`FileSystem`] trait and can be replaced in tests.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Minimal read-only file system interface.
pub trait FileSystem {
    /// Lists entry names of a directory, in the order the source yields them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Returns true if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Reads a UTF-8 file completely.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// In-memory file system with an explicit listing order.
///
/// Directories are implied by the files and directories added beneath them.
/// Listing order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, String>,
    children: BTreeMap<PathBuf, Vec<String>>,
}

impl MemoryFileSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with `content`, creating parent directories as needed.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> &mut Self {
        let path = path.as_ref();
        self.link_parents(path);
        self.files.insert(path.to_path_buf(), content.into());
        self
    }

    /// Adds an empty directory, creating parent directories as needed.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.link_parents(path);
        self.children.entry(path.to_path_buf()).or_default();
        self
    }

    fn link_parents(&mut self, path: &Path) {
        let mut current = path;
        while let (Some(parent), Some(name)) = (current.parent(), current.file_name()) {
            let name = name.to_string_lossy().into_owned();
            let siblings = self.children.entry(parent.to_path_buf()).or_default();
            if siblings.contains(&name) {
                break;
            }
            siblings.push(name);
            current = parent;
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        self.children.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such directory: {}", path.display()),
            )
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.children.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_listing_keeps_insertion_order() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("root/b.txt", "b")
            .add_file("root/a.txt", "a")
            .add_dir("root/c");

        assert_eq!(
            fs.list_dir(Path::new("root")).unwrap(),
            vec!["b.txt", "a.txt", "c"]
        );
        assert!(fs.is_dir(Path::new("root/c")));
        assert!(!fs.is_dir(Path::new("root/a.txt")));
        assert_eq!(fs.read_to_string(Path::new("root/a.txt")).unwrap(), "a");
    }

    #[test]
    fn test_memory_missing_paths() {
        let fs = MemoryFileSystem::new();
        assert!(fs.list_dir(Path::new("nope")).is_err());
        assert!(fs.read_to_string(Path::new("nope.txt")).is_err());
    }

    #[test]
    fn test_os_file_system_reads_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file.txt"), "hello").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let os = OsFileSystem;
        let mut names = os.list_dir(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["file.txt", "sub"]);
        assert!(os.is_dir(&dir.path().join("sub")));
        assert_eq!(os.read_to_string(&dir.path().join("file.txt")).unwrap(), "hello");
    }
}
