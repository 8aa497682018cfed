pub mod bundle;
pub mod plan;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tb_vulcanize::config::ConfigWarning;
use tb_vulcanize::presentation::output;

/// Absolute project root; relative roots are resolved against the cwd.
pub fn project_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize()
        .with_context(|| format!("project root not found: {}", root.display()))
}

pub fn report_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let _ = output::emit(output::warning_event(warning));
        } else {
            eprintln!("{}", output::render_warning(warning));
        }
    }
}
