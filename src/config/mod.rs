// src/config/mod.rs

//! Optional TOML configuration for codenotify.
//!
//! - `model.rs` holds the serde data model.
//! - `loader.rs` reads a config file from disk.
//! - `validate.rs` turns a raw config into a checked `ConfigFile`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, ConfigSection, DEFAULT_RULE_FILENAME, RawConfigFile};
pub use validate::{validate_config, validate_filename};
