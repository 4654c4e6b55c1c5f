// tests/git_revision.rs

use std::fs;
use std::path::Path;
use std::process::Command;

use codenotify::engine::resolve;
use codenotify::errors::CodenotifyError;
use codenotify::fs::GitFileSystem;
use codenotify_test_utils::{init_tracing, notification_map};
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=test", "-c", "user.email=test@example.com"])
        .args(args)
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Repository with a root rule file and one nested under `a/b`.
fn committed_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "--quiet"]);
    write(dir.path(), "CODENOTIFY", "** @root\n");
    write(dir.path(), "a/b/CODENOTIFY", "* @deep\n");
    git(dir.path(), &["add", "."]);
    git(dir.path(), &["commit", "--quiet", "-m", "rules"]);
    dir
}

#[test]
fn reads_rule_files_from_head() {
    init_tracing();
    let repo = committed_repo();
    // Uncommitted edits are not visible at HEAD.
    write(repo.path(), "x/CODENOTIFY", "* @uncommitted\n");

    let fs = GitFileSystem::new(repo.path(), "HEAD");
    let notifs = resolve(&fs, &["a/b/c.txt", "x/y.txt"], "CODENOTIFY").unwrap();
    assert_eq!(
        notifs,
        notification_map(&[
            ("@deep", &["a/b/c.txt"]),
            ("@root", &["a/b/c.txt", "x/y.txt"]),
        ])
    );
}

#[test]
fn paths_stay_repository_relative_from_a_subdirectory() {
    init_tracing();
    let repo = committed_repo();

    let fs = GitFileSystem::new(repo.path().join("a"), "HEAD");
    let notifs = resolve(&fs, &["a/b/c.txt"], "CODENOTIFY").unwrap();
    assert_eq!(
        notifs,
        notification_map(&[("@root", &["a/b/c.txt"]), ("@deep", &["a/b/c.txt"])])
    );
}

#[test]
fn unknown_revision_is_an_access_error() {
    init_tracing();
    let repo = committed_repo();

    let fs = GitFileSystem::new(repo.path(), "no-such-rev");
    match resolve(&fs, &["x/y.txt"], "CODENOTIFY") {
        Err(CodenotifyError::Access { path, .. }) => assert_eq!(path, "CODENOTIFY"),
        other => panic!("Expected Access error, got: {:?}", other),
    }
}
