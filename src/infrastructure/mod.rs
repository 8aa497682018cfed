//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `fs` - local and in-memory file systems
//! - `components` - directory-scanning component inventory
//! - `flatten` - flattening engines

pub mod components;
pub mod flatten;
pub mod fs;

pub use components::DirectoryComponentSource;
pub use flatten::{engine_for, InlineFlattener, VulcanizeCli};
pub use fs::{LocalFs, MemoryFs};
