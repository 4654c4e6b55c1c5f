// src/rules/pattern.rs

//! Glob-style rule patterns compiled to anchored regular expressions.
//!
//! A pattern is escaped as a whole and then rewritten by a fixed, ordered
//! pipeline of textual substitutions over the escaped `*` tokens. The order
//! of [`PIPELINE`] is observable: `/**/` has to be consumed before the
//! leading `**/` and trailing `/**` forms get a chance to match parts of it.
//!
//! | pattern        | accepts                                   |
//! |----------------|-------------------------------------------|
//! | `*`            | any name without a `/`                    |
//! | `**`           | everything                                |
//! | `**/file.md`   | `file.md`, `a/file.md`, `a/b/file.md`     |
//! | `a/**/b`       | `a/b`, `a/x/b`, `a/x/y/b`                 |
//! | `dir/`         | same as `dir/**`                          |

use std::fmt;

use regex::Regex;

/// Where in the escaped expression a [`Step`] is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Every non-overlapping occurrence.
    Anywhere,
    /// Only at the very start of the expression.
    Leading,
    /// Only at the very end of the expression.
    Trailing,
}

/// One `(token, replacement)` rewrite over the escaped pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub token: &'static str,
    pub replacement: &'static str,
    pub anchor: Anchor,
}

impl Step {
    pub fn apply(&self, expr: &str) -> String {
        match self.anchor {
            Anchor::Anywhere => expr.replace(self.token, self.replacement),
            Anchor::Leading => match expr.strip_prefix(self.token) {
                Some(rest) => format!("{}{rest}", self.replacement),
                None => expr.to_string(),
            },
            Anchor::Trailing => match expr.strip_suffix(self.token) {
                Some(rest) => format!("{rest}{}", self.replacement),
                None => expr.to_string(),
            },
        }
    }
}

/// Substitutions applied, in order, to the escaped pattern.
pub const PIPELINE: [Step; 5] = [
    // a/**/b: zero or more whole segments between a and b.
    Step {
        token: r"/\*\*/",
        replacement: "/([^/]*/)*",
        anchor: Anchor::Anywhere,
    },
    // **/b: zero or more whole leading segments.
    Step {
        token: r"\*\*/",
        replacement: "([^/]+/)*",
        anchor: Anchor::Leading,
    },
    // a/**: the rest of the path.
    Step {
        token: r"/\*\*",
        replacement: ".*",
        anchor: Anchor::Trailing,
    },
    Step {
        token: r"\*\*",
        replacement: ".*",
        anchor: Anchor::Anywhere,
    },
    // *: anything inside a single segment.
    Step {
        token: r"\*",
        replacement: "[^/]*",
        anchor: Anchor::Anywhere,
    },
];

/// Translate a glob-style pattern into the source of an anchored regex.
pub fn pattern_to_regex(pattern: &str) -> String {
    let mut pattern = pattern.to_string();
    if pattern.ends_with('/') {
        pattern.push_str("**");
    }

    let expr = PIPELINE
        .iter()
        .fold(regex::escape(&pattern), |expr, step| step.apply(&expr));

    format!("^{expr}$")
}

/// Compiled matcher for one rule pattern.
///
/// Paths passed to [`PathMatcher::is_match`] are slash-separated and relative
/// to the directory of the rule file the pattern came from. Matching is
/// case-sensitive and a leading `.` is an ordinary character.
#[derive(Clone)]
pub struct PathMatcher {
    pattern: String,
    regex: Regex,
}

impl fmt::Debug for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathMatcher")
            .field("pattern", &self.pattern)
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

impl PathMatcher {
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&pattern_to_regex(pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, rel_path: &str) -> bool {
        self.regex.is_match(rel_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(pattern: &str) -> PathMatcher {
        PathMatcher::compile(pattern).unwrap()
    }

    #[test]
    fn step_segments_between_replaces_every_occurrence() {
        let step = PIPELINE[0];
        assert_eq!(step.apply(r"a/\*\*/b"), "a/([^/]*/)*b");
        assert_eq!(step.apply(r"a/\*\*/b/\*\*/c"), "a/([^/]*/)*b/([^/]*/)*c");
    }

    #[test]
    fn step_leading_segments_only_at_start() {
        let step = PIPELINE[1];
        assert_eq!(step.apply(r"\*\*/x"), "([^/]+/)*x");
        assert_eq!(step.apply(r"a\*\*/x"), r"a\*\*/x");
    }

    #[test]
    fn step_trailing_rest_only_at_end() {
        let step = PIPELINE[2];
        assert_eq!(step.apply(r"dir/\*\*"), "dir.*");
        assert_eq!(step.apply(r"dir/\*\*x"), r"dir/\*\*x");
    }

    #[test]
    fn step_double_star_anywhere() {
        assert_eq!(PIPELINE[3].apply(r"a\*\*b"), "a.*b");
    }

    #[test]
    fn step_single_star_stays_in_segment() {
        assert_eq!(PIPELINE[4].apply(r"\*\.go"), r"[^/]*\.go");
    }

    #[test]
    fn trailing_slash_means_everything_below() {
        assert_eq!(pattern_to_regex("dir/"), pattern_to_regex("dir/**"));
    }

    #[test]
    fn metacharacters_are_literal() {
        let m = matcher("a+b(1).md");
        assert!(m.is_match("a+b(1).md"));
        assert!(!m.is_match("aab1.md"));
        assert!(!matcher("file.md").is_match("fileXmd"));
    }

    #[test]
    fn star_matches_single_segment() {
        let m = matcher("*");
        assert!(m.is_match("CODENOTIFY"));
        assert!(m.is_match("file.md"));
        assert!(!m.is_match("dir/file.md"));
    }

    #[test]
    fn double_star_matches_any_depth() {
        let m = matcher("**");
        for path in ["CODENOTIFY", "file.md", "dir/file.md", "dir/dir/file.md"] {
            assert!(m.is_match(path), "{path}");
        }
    }

    #[test]
    fn leading_double_star_matches_file_at_any_depth() {
        let m = matcher("**/file.md");
        assert!(m.is_match("file.md"));
        assert!(m.is_match("a/file.md"));
        assert!(m.is_match("a/b/file.md"));
        assert!(!m.is_match("a/filed.md"));
    }

    #[test]
    fn inner_double_star_matches_zero_or_more_segments() {
        let m = matcher("a/**/b");
        assert!(m.is_match("a/b"));
        assert!(m.is_match("a/x/b"));
        assert!(m.is_match("a/x/y/b"));
        assert!(!m.is_match("ab"));
        assert!(!m.is_match("a/x/c"));
    }

    #[test]
    fn dir_double_star_matches_below_dir() {
        let m = matcher("dir/**");
        assert!(m.is_match("dir/file.md"));
        assert!(m.is_match("dir/dir/file.md"));
        assert!(!m.is_match("file.md"));
    }

    #[test]
    fn leading_slash_never_matches_relative_paths() {
        assert!(!matcher("/file.md").is_match("file.md"));
    }

    #[test]
    fn dotfiles_are_ordinary() {
        assert!(matcher("*").is_match(".gitignore"));
        assert!(matcher("**/*.yml").is_match(".github/workflows/ci.yml"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matcher("*.MD").is_match("file.md"));
    }

    #[test]
    fn parent_segments_are_literal_text() {
        assert!(!matcher("../*").is_match("file.md"));
    }
}
