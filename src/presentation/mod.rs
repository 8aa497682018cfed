//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use tb_vulcanize::presentation::factory;
//!
//! let (config, _warnings) = factory::load_config(&root, None, None)?;
//! let use_case = factory::create_bundle_use_case(&config, &root);
//! let report = use_case.run(false).execute()?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_bundle_use_case, load_config, ConcreteBundleUseCase};
pub use output::OutputFormat;
