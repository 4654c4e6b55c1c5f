// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    /// Present but unreadable; reading fails with this error kind and message.
    Broken(io::ErrorKind, String),
}

/// In-memory [`FileSystem`] keyed by slash-separated relative paths.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.lock()
            .insert(path.as_ref().to_path_buf(), MockEntry::File(content.into()));
    }

    /// Make reads of `path` fail with something other than NotFound.
    pub fn add_broken(&self, path: impl AsRef<Path>, kind: io::ErrorKind, message: &str) {
        self.lock().insert(
            path.as_ref().to_path_buf(),
            MockEntry::Broken(kind, message.to_string()),
        );
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, MockEntry>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.lock().get(path) {
            Some(MockEntry::File(content)) => String::from_utf8(content.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Some(MockEntry::Broken(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_added_files_and_reports_missing() {
        let fs = MockFileSystem::new();
        fs.add_file("dir/CODENOTIFY", "* @a\n");

        assert_eq!(fs.read_to_string(Path::new("dir/CODENOTIFY")).unwrap(), "* @a\n");
        let err = fs.read_to_string(Path::new("CODENOTIFY")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn broken_entries_fail_with_their_kind() {
        let fs = MockFileSystem::new();
        fs.add_broken("CODENOTIFY", io::ErrorKind::PermissionDenied, "denied");
        let err = fs.read_to_string(Path::new("CODENOTIFY")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn invalid_utf8_is_invalid_data() {
        let fs = MockFileSystem::new();
        fs.add_file("CODENOTIFY", vec![0xff, 0xfe]);
        let err = fs.read_to_string(Path::new("CODENOTIFY")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
