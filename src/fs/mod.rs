// src/fs/mod.rs

//! Read-only access to rule files.
//!
//! Implementations report a missing file as [`io::ErrorKind::NotFound`];
//! the resolver skips those directories. Any other error aborts resolution.

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub mod git;
pub mod mock;

pub use git::GitFileSystem;

/// Abstract rule-file accessor.
pub trait FileSystem: Send + Sync + Debug {
    /// Read the file at `path` (slash-separated, relative to the repository
    /// root) as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads rule files from a working tree on disk.
#[derive(Debug, Clone)]
pub struct RealFileSystem {
    root: PathBuf,
}

impl RealFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.root.join(path))
    }
}
