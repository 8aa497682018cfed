use std::path::Path;

use anyhow::Result;

use tb_vulcanize::presentation::{factory, output};

pub fn cmd_plan(overwrite: bool, root: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let project_root = super::project_root(root)?;
    let (config, warnings) = factory::load_config(&project_root, config, None)?;
    super::report_warnings(&warnings, json);

    let use_case = factory::create_bundle_use_case(&config, &project_root);
    let summary = use_case.plan(overwrite)?.summary();

    if json {
        let _ = output::emit(output::plan_event(&summary));
    } else {
        print!("{}", output::render_plan(&summary));
    }
    Ok(())
}
