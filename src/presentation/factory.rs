//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::BundleUseCase;
use crate::config::{Config, ConfigWarning, Engine};
use crate::domain::ports::Flattener;
use crate::error::VulcanizeResult;
use crate::infrastructure::{engine_for, DirectoryComponentSource, LocalFs};

/// Type alias for the concrete BundleUseCase with all dependencies
pub type ConcreteBundleUseCase =
    BundleUseCase<DirectoryComponentSource, Box<dyn Flattener>, LocalFs>;

/// Resolve configuration for a project root.
///
/// An explicit `config_file` replaces the `<root>/tb-vulcanize.toml` lookup;
/// environment overrides apply either way and `engine` wins over both.
pub fn load_config(
    project_root: &Path,
    config_file: Option<&Path>,
    engine: Option<Engine>,
) -> VulcanizeResult<(Config, Vec<ConfigWarning>)> {
    let (mut config, warnings) = match config_file {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(project_root)?,
    };

    if let Some(engine) = engine {
        config.bundle.engine = engine;
    }
    Ok((config, warnings))
}

/// Create a bundle use case with all dependencies wired up
pub fn create_bundle_use_case(config: &Config, project_root: &Path) -> ConcreteBundleUseCase {
    let options = config.bundle_options(project_root);
    let components = DirectoryComponentSource::new(options.components_dir());
    let flattener = engine_for(config.bundle.engine, &config.vulcanize.binary);

    BundleUseCase::new(components, flattener, LocalFs::new(), options)
}
