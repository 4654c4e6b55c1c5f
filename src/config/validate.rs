// src/config/validate.rs

use crate::config::model::{ConfigFile, ConfigSection, RawConfigFile};
use crate::errors::{CodenotifyError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = CodenotifyError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw.config)?;
        Ok(ConfigFile::new_unchecked(raw.config))
    }
}

/// Check the invariants of a `[config]` section.
pub fn validate_config(cfg: &ConfigSection) -> Result<()> {
    validate_filename(&cfg.filename)?;
    validate_ignore(&cfg.ignore)?;
    Ok(())
}

/// A rule-file base name must be a single, non-empty path segment.
pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(CodenotifyError::ConfigError(
            "[config].filename must not be empty".to_string(),
        ));
    }
    if filename.contains('/') || filename.contains('\\') {
        return Err(CodenotifyError::ConfigError(format!(
            "[config].filename must be a base name without path separators (got '{filename}')"
        )));
    }
    if filename.chars().any(char::is_whitespace) {
        return Err(CodenotifyError::ConfigError(format!(
            "[config].filename must not contain whitespace (got '{filename}')"
        )));
    }
    Ok(())
}

fn validate_ignore(ignore: &[String]) -> Result<()> {
    for subscriber in ignore {
        if subscriber.is_empty() || subscriber.chars().any(char::is_whitespace) {
            return Err(CodenotifyError::ConfigError(format!(
                "[config].ignore entries must be non-empty and contain no whitespace (got '{subscriber}')"
            )));
        }
    }
    Ok(())
}
