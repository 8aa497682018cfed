//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BundleUseCase` - resolve, flatten, add header, write the artifact

pub mod bundle;

pub use bundle::{BundleOptions, BundlePlan, BundleReport, BundleTask, BundleUseCase, PlanSummary};
