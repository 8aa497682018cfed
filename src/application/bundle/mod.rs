//! Bundle Use Case Module

mod options;
mod result;
mod use_case;

pub use options::{
    BundleOptions, DEFAULT_COMPONENTS_ROOT, DEFAULT_ENTRY, DEFAULT_OUTPUT_DIR,
    DEFAULT_VARIANT_SUFFIX,
};
pub use result::{BundlePlan, BundleReport, PlanSummary};
pub use use_case::{BundleTask, BundleUseCase};
