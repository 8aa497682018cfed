//! Bundle Results
//!
//! What the task decided (plan) and what it wrote (report).

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{ExclusionList, PathRedirect};

/// Everything computed before the flattening engine runs
#[derive(Debug, Clone)]
pub struct BundlePlan {
    /// Absolute entry document path
    pub entry: PathBuf,
    /// Absolute output file path
    pub output_path: PathBuf,
    pub redirects: Vec<PathRedirect>,
    pub excludes: ExclusionList,
    /// First-party component names in canonical form
    pub first_party: Vec<String>,
}

impl BundlePlan {
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            event: "plan",
            entry: self.entry.display().to_string(),
            output: self.output_path.display().to_string(),
            first_party: self.first_party.clone(),
            redirects: self.redirects.iter().map(ToString::to_string).collect(),
            excludes: self.excludes.as_slice().to_vec(),
        }
    }
}

/// JSON shape of a plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub event: &'static str,
    pub entry: String,
    pub output: String,
    pub first_party: Vec<String>,
    pub redirects: Vec<String>,
    pub excludes: Vec<String>,
}

/// Result of a completed bundle run
#[derive(Debug, Clone, Serialize)]
pub struct BundleReport {
    /// File that was written
    pub output_path: PathBuf,
    /// Bytes written, header included
    pub bytes: usize,
    /// Engine that produced the flattened document
    pub engine: &'static str,
    pub redirects: usize,
    pub excludes: usize,
}
