//! Output Spec Value Object
//!
//! Decides the output filename. `overwrite = true` produces the plain
//! `<base>` name; otherwise the variant suffix is appended so the
//! open-source artifact can sit next to the default build.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    entry: PathBuf,
    base_name: String,
    variant_suffix: String,
    overwrite: bool,
}

impl OutputSpec {
    /// Build from the entry document path. The base name is the entry's file name.
    pub fn new(entry: impl Into<PathBuf>, variant_suffix: impl Into<String>, overwrite: bool) -> Self {
        let entry = entry.into();
        let base_name = entry
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            entry,
            base_name,
            variant_suffix: variant_suffix.into(),
            overwrite,
        }
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn file_name(&self) -> String {
        if self.overwrite {
            self.base_name.clone()
        } else {
            format!("{}{}", self.base_name, self.variant_suffix)
        }
    }

    /// Full output path inside `output_dir`
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}
