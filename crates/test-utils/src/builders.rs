#![allow(dead_code)]

use std::io;

use codenotify::fs::mock::MockFileSystem;

/// Builder for an in-memory repository snapshot.
///
/// Every file added with [`RepoBuilder::file`] also becomes a changed path,
/// in insertion order, as if a diff touched every file in the snapshot.
pub struct RepoBuilder {
    fs: MockFileSystem,
    paths: Vec<String>,
}

impl RepoBuilder {
    pub fn new() -> Self {
        Self {
            fs: MockFileSystem::new(),
            paths: Vec::new(),
        }
    }

    /// Add a file that is both present and changed.
    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.fs.add_file(path, content);
        self.paths.push(path.to_string());
        self
    }

    /// Add several empty changed files.
    pub fn files(self, paths: &[&str]) -> Self {
        paths.iter().fold(self, |builder, path| builder.file(path, ""))
    }

    /// Add a file that exists in the snapshot but is not part of the change.
    pub fn unchanged(self, path: &str, content: &str) -> Self {
        self.fs.add_file(path, content);
        self
    }

    /// Add an entry whose reads fail with `kind`.
    pub fn broken(self, path: &str, kind: io::ErrorKind) -> Self {
        self.fs.add_broken(path, kind, "simulated failure");
        self
    }

    pub fn build(self) -> (MockFileSystem, Vec<String>) {
        (self.fs, self.paths)
    }
}

impl Default for RepoBuilder {
    fn default() -> Self {
        Self::new()
    }
}
