// src/config/model.rs

use serde::Deserialize;

/// Rule-file base name used when nothing else is configured.
pub const DEFAULT_RULE_FILENAME: &str = "CODENOTIFY";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// filename = "CODENOTIFY"
/// subscriber_threshold = 10
/// ignore = ["@ci-bot"]
/// ```
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Base name of the rule files looked up in every ancestor directory.
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Suppress the report when more than this many subscribers would be
    /// notified. `0` means no limit.
    #[serde(default)]
    pub subscriber_threshold: usize,

    /// Subscribers that are never reported.
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_filename() -> String {
    DEFAULT_RULE_FILENAME.to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            subscriber_threshold: 0,
            ignore: Vec::new(),
        }
    }
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection) -> Self {
        Self { config }
    }

    pub fn filename(&self) -> &str {
        &self.config.filename
    }

    pub fn subscriber_threshold(&self) -> usize {
        self.config.subscriber_threshold
    }

    pub fn ignore(&self) -> &[String] {
        &self.config.ignore
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(ConfigSection::default())
    }
}
