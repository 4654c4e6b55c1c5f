// src/rules/mod.rs

//! Rule files and the patterns inside them.
//!
//! - [`ancestry`] walks a changed path's ancestor directories.
//! - [`parser`] turns the text of one rule file into [`Rule`]s.
//! - [`pattern`] compiles a rule's glob-style pattern into a [`PathMatcher`].

pub mod ancestry;
pub mod parser;
pub mod pattern;

use std::fmt;

pub use ancestry::{ancestor_dirs, relative_to, rule_file_path};
pub use parser::parse_rules;
pub use pattern::{PathMatcher, pattern_to_regex};

/// Opaque subscriber handle, e.g. `@alice` or `@org/team`.
pub type Subscriber = String;

/// One `pattern subscriber...` line of a rule file.
#[derive(Clone)]
pub struct Rule {
    pattern: String,
    subscribers: Vec<Subscriber>,
    source_file: String,
    raw_text: String,
    matcher: PathMatcher,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("subscribers", &self.subscribers)
            .field("source_file", &self.source_file)
            .finish_non_exhaustive()
    }
}

impl Rule {
    pub(crate) fn new(
        pattern: String,
        subscribers: Vec<Subscriber>,
        source_file: String,
        raw_text: String,
        matcher: PathMatcher,
    ) -> Self {
        Self {
            pattern,
            subscribers,
            source_file,
            raw_text,
            matcher,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Subscribers in the order they were written; never empty.
    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    /// Path of the rule file this rule was read from.
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// The line exactly as it appeared in the rule file.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Whether this rule applies to `rel_path`, taken relative to the rule
    /// file's own directory.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.matcher.is_match(rel_path)
    }
}

/// The parsed rules of a single directory's rule file.
#[derive(Debug, Clone)]
pub struct RuleFile {
    directory: String,
    path: String,
    rules: Vec<Rule>,
}

impl RuleFile {
    /// Parse `content`, read from the rule file at `path` inside `directory`.
    pub fn parse(
        directory: impl Into<String>,
        path: impl Into<String>,
        content: &str,
    ) -> crate::errors::Result<Self> {
        let path = path.into();
        let rules = parse_rules(&path, content)?;
        Ok(Self {
            directory: directory.into(),
            path,
            rules,
        })
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules matching `changed_path`, in file order.
    ///
    /// `changed_path` is relative to the repository root; it is made
    /// relative to this file's directory before matching.
    pub fn matching<'a>(&'a self, changed_path: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        let rel = relative_to(&self.directory, changed_path);
        self.rules.iter().filter(move |rule| rule.matches(rel))
    }
}
