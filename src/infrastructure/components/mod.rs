//! Component inventory implementations

mod directory;

pub use directory::DirectoryComponentSource;
