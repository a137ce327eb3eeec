//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A single top-level entry returned by [`FileSystem::read_dir`]
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// Read-only view of a workspace, swappable for an in-memory mock in tests.
///
/// Implementations must be safe to share across threads: the stack detector
/// holds one behind an `Arc` and may be called concurrently.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Reads at most `max_bytes` from the start of the file.
    ///
    /// A single read is issued, so fewer bytes than available may be
    /// returned. Callers treat a short read as the whole content.
    fn read_bytes(&self, path: &Path, max_bytes: usize) -> Result<Vec<u8>>;

    /// Lists the direct children of `path`. Never recurses.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry_accessors() {
        let entry = DirEntry {
            path: PathBuf::from("/workspace/go.mod"),
            name: "go.mod".to_string(),
            file_type: FileType::File,
        };
        assert_eq!(entry.path(), Path::new("/workspace/go.mod"));
        assert_eq!(entry.file_name(), "go.mod");
        assert!(!entry.is_dir());
    }
}
