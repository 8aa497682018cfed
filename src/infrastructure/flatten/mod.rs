//! Flattening engine implementations
//!
//! - `InlineFlattener` - built-in inliner, no external tools required
//! - `VulcanizeCli` - delegates to the `vulcanize` executable

mod html;
mod inline;
mod paths;
mod vulcanize_cli;

pub use inline::InlineFlattener;
pub use vulcanize_cli::{VulcanizeCli, DEFAULT_VULCANIZE_BIN};

use crate::config::Engine;
use crate::domain::ports::Flattener;

/// Build the engine selected in configuration.
pub fn engine_for(engine: Engine, vulcanize_bin: &str) -> Box<dyn Flattener> {
    match engine {
        Engine::Builtin => Box::new(InlineFlattener::new()),
        Engine::Vulcanize => Box::new(VulcanizeCli::new(vulcanize_bin)),
    }
}
