// src/rules/parser.rs

//! Rule-file text format.
//!
//! ```text
//! # whole-line comment
//! **/*.go  @go-team
//! docs/    @alice @bob
//! ```
//!
//! Blank lines and lines whose first non-whitespace character is `#` are
//! skipped. Every other line is split on whitespace: the first field is the
//! pattern, the rest are subscribers. A `#` anywhere else is literal.

use crate::errors::{CodenotifyError, Result};
use crate::rules::pattern::PathMatcher;
use crate::rules::Rule;

/// Parse the text of the rule file at `path` into rules, in file order.
pub fn parse_rules(path: &str, content: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let Some(pattern) = fields.next() else {
            continue;
        };
        let subscribers: Vec<String> = fields.map(str::to_string).collect();

        if subscribers.is_empty() {
            return Err(CodenotifyError::MalformedRule {
                path: path.to_string(),
                line: line.to_string(),
            });
        }

        let matcher = PathMatcher::compile(pattern).map_err(|source| {
            CodenotifyError::InvalidPattern {
                path: path.to_string(),
                rule: line.to_string(),
                source,
            }
        })?;

        rules.push(Rule::new(
            pattern.to_string(),
            subscribers,
            path.to_string(),
            line.to_string(),
            matcher,
        ));
    }

    Ok(rules)
}
