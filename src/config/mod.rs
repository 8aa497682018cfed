//! Configuration module for tb-vulcanize
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TB_VULCANIZE_*)
//! 3. Project config (tb-vulcanize.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_overrides_from, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{BundleConfig, Config, Engine, VulcanizeConfig};
