// src/rules/ancestry.rs

//! Lexical path helpers for walking a changed path's ancestor directories.
//!
//! All paths here are slash-separated strings relative to the repository
//! root. Nothing is resolved against the filesystem: `.` and `..` are plain
//! segments like any other.

/// Candidate rule-file directories for `path`, root first, immediate parent
/// last.
///
/// `"a/b/c.txt"` yields `["", "a", "a/b"]`; a root-level file yields `[""]`.
pub fn ancestor_dirs(path: &str) -> Vec<String> {
    let segments: Vec<&str> = path.split('/').collect();
    (0..segments.len())
        .map(|depth| segments[..depth].join("/"))
        .collect()
}

/// Path of the rule file named `filename` inside `dir`.
pub fn rule_file_path(dir: &str, filename: &str) -> String {
    if dir.is_empty() {
        filename.to_string()
    } else {
        format!("{dir}/{filename}")
    }
}

/// `path` taken relative to its ancestor directory `dir`.
///
/// `dir` must be one of the values produced by [`ancestor_dirs`] for `path`.
/// Falls back to the whole path if it does not live under `dir`.
pub fn relative_to<'a>(dir: &str, path: &'a str) -> &'a str {
    if dir.is_empty() {
        return path;
    }
    path.strip_prefix(dir)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_level_file_has_only_root() {
        assert_eq!(ancestor_dirs("file.md"), vec![""]);
    }

    #[test]
    fn nested_file_walks_root_to_leaf() {
        assert_eq!(ancestor_dirs("a/b/c.txt"), vec!["", "a", "a/b"]);
    }

    #[test]
    fn dot_segments_are_literal() {
        assert_eq!(ancestor_dirs("../x/y"), vec!["", "..", "../x"]);
    }

    #[test]
    fn rule_file_path_at_root_and_nested() {
        assert_eq!(rule_file_path("", "CODENOTIFY"), "CODENOTIFY");
        assert_eq!(rule_file_path("dir/sub", "OWNERS"), "dir/sub/OWNERS");
    }

    #[test]
    fn relative_to_strips_ancestor() {
        assert_eq!(relative_to("", "dir/file.go"), "dir/file.go");
        assert_eq!(relative_to("dir", "dir/file.go"), "file.go");
        assert_eq!(relative_to("dir", "dir/sub/file.go"), "sub/file.go");
    }

    #[test]
    fn relative_to_does_not_split_inside_a_segment() {
        assert_eq!(relative_to("dir", "dirfile.go"), "dirfile.go");
    }
}
