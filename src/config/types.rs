//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::bundle::{
    BundleOptions, DEFAULT_COMPONENTS_ROOT, DEFAULT_ENTRY, DEFAULT_OUTPUT_DIR,
    DEFAULT_VARIANT_SUFFIX,
};
use crate::domain::services::{FIRST_PARTY_PREFIXES, THIRD_PARTY_SCRIPTS};
use crate::error::VulcanizeResult;
use crate::infrastructure::flatten::DEFAULT_VULCANIZE_BIN;

use super::loader::{self, ConfigWarning};

/// Flattening engine selection
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Built-in inliner
    #[default]
    Builtin,
    /// External `vulcanize` executable
    Vulcanize,
}

impl Engine {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "builtin" | "built-in" | "inline" => Some(Engine::Builtin),
            "vulcanize" => Some(Engine::Vulcanize),
            _ => None,
        }
    }
}

/// Bundle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    #[serde(default = "default_components_root")]
    pub components_root: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_variant_suffix")]
    pub variant_suffix: String,

    #[serde(default = "default_prefixes")]
    pub first_party_prefixes: Vec<String>,

    /// Replaces the built-in third-party script list when set
    #[serde(default = "default_manual_excludes")]
    pub manual_excludes: Vec<String>,

    #[serde(default)]
    pub engine: Engine,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            components_root: default_components_root(),
            output_dir: default_output_dir(),
            variant_suffix: default_variant_suffix(),
            first_party_prefixes: default_prefixes(),
            manual_excludes: default_manual_excludes(),
            engine: Engine::default(),
        }
    }
}

fn default_entry() -> PathBuf {
    PathBuf::from(DEFAULT_ENTRY)
}

fn default_components_root() -> String {
    DEFAULT_COMPONENTS_ROOT.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_variant_suffix() -> String {
    DEFAULT_VARIANT_SUFFIX.to_string()
}

fn default_prefixes() -> Vec<String> {
    FIRST_PARTY_PREFIXES.iter().map(|p| p.to_string()).collect()
}

fn default_manual_excludes() -> Vec<String> {
    THIRD_PARTY_SCRIPTS.iter().map(|p| p.to_string()).collect()
}

/// External `vulcanize` tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulcanizeConfig {
    #[serde(default = "default_binary")]
    pub binary: String,
}

impl Default for VulcanizeConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

fn default_binary() -> String {
    DEFAULT_VULCANIZE_BIN.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub vulcanize: VulcanizeConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> VulcanizeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> VulcanizeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `tb-vulcanize.toml` from the project root, or defaults, then env overrides
    pub fn load_or_default(project_root: &Path) -> VulcanizeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (TB_VULCANIZE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolve bundle options for a project root
    pub fn bundle_options(&self, project_root: &Path) -> BundleOptions {
        let b = &self.bundle;
        BundleOptions {
            project_root: project_root.to_path_buf(),
            entry: b.entry.clone(),
            components_root: b.components_root.clone(),
            output_dir: b.output_dir.clone(),
            variant_suffix: b.variant_suffix.clone(),
            first_party_prefixes: b.first_party_prefixes.clone(),
            manual_excludes: b.manual_excludes.clone(),
        }
    }
}
