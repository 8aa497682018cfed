//! tb-vulcanize - single-file TensorBoard frontend bundler
//!
//! Flattens the TensorBoard entry document and its transitive HTML imports
//! into one self-contained artifact. First-party components are redirected
//! from their dash-form import paths to their underscore-form directories,
//! third-party components and vendored scripts stay external, and the result
//! is written with a license header under `dist/`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{BundleOptions, BundleReport, BundleUseCase};
pub use config::{Config, Engine};
pub use domain::ports::{ComponentSource, FileSystem, FlattenOptions, Flattener};
pub use domain::value_objects::{ComponentName, ExclusionList, OutputSpec, PathRedirect};
pub use error::{VulcanizeError, VulcanizeResult};
