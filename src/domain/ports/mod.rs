//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod component_source;
pub mod file_system;
pub mod flattener;

pub use component_source::{ComponentSource, StaticComponents};
pub use file_system::{FileSystem, FsError, FsResult};
pub use flattener::{FlattenError, FlattenOptions, Flattener};
