use std::path::Path;

use anyhow::Result;

use tb_vulcanize::config::Engine;
use tb_vulcanize::presentation::{factory, output};

pub fn cmd_bundle(
    overwrite: bool,
    root: &Path,
    config: Option<&Path>,
    engine: Option<Engine>,
    json: bool,
) -> Result<()> {
    let project_root = super::project_root(root)?;
    let (config, warnings) = factory::load_config(&project_root, config, engine)?;
    super::report_warnings(&warnings, json);

    let use_case = factory::create_bundle_use_case(&config, &project_root);

    if json {
        let _ = output::emit(serde_json::json!({
            "event": "start",
            "command": "bundle",
            "root": project_root.display().to_string(),
            "engine": use_case.engine_name(),
            "overwrite": overwrite,
        }));
    }

    let report = use_case.run(overwrite).execute()?;

    if json {
        let _ = output::emit(output::report_event(&report));
    } else {
        print!("{}", output::render_report(&report));
    }
    Ok(())
}
