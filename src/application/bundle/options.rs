//! Bundle Options
//!
//! Fully resolved inputs of the bundle task, after config, environment and
//! CLI flags have been merged.

use std::path::{Path, PathBuf};

use crate::domain::services::{FIRST_PARTY_PREFIXES, THIRD_PARTY_SCRIPTS};

pub const DEFAULT_ENTRY: &str = "components/tf_tensorboard/tf-tensorboard.html";
pub const DEFAULT_COMPONENTS_ROOT: &str = "components";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_VARIANT_SUFFIX: &str = ".OPENSOURCE";

/// Options for the bundle use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    /// Project root; every other path is relative to it
    pub project_root: PathBuf,
    /// Entry document
    pub entry: PathBuf,
    /// Directory holding one subdirectory per component
    pub components_root: String,
    /// Directory the artifact is written to
    pub output_dir: PathBuf,
    /// Suffix appended to the artifact name unless overwriting
    pub variant_suffix: String,
    /// Prefixes marking first-party components
    pub first_party_prefixes: Vec<String>,
    /// Scripts kept external in addition to third-party components
    pub manual_excludes: Vec<String>,
}

impl BundleOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            entry: PathBuf::from(DEFAULT_ENTRY),
            components_root: DEFAULT_COMPONENTS_ROOT.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            variant_suffix: DEFAULT_VARIANT_SUFFIX.to_string(),
            first_party_prefixes: FIRST_PARTY_PREFIXES.iter().map(|p| p.to_string()).collect(),
            manual_excludes: THIRD_PARTY_SCRIPTS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn entry_path(&self) -> PathBuf {
        self.project_root.join(&self.entry)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.project_root.join(&self.components_root)
    }

    pub fn output_dir_path(&self) -> PathBuf {
        self.project_root.join(&self.output_dir)
    }

    pub fn with_entry(mut self, entry: impl AsRef<Path>) -> Self {
        self.entry = entry.as_ref().to_path_buf();
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
