//! tb-vulcanize CLI
//!
//! Usage: tb-vulcanize <COMMAND>
//!
//! Commands:
//!   bundle  Flatten the entry document and write the bundle
//!   plan    Show redirects, exclusions and the output path

mod commands;

use anyhow::Result;
use clap::Parser;

use tb_vulcanize::error::VulcanizeError;
use tb_vulcanize::logging;
use tb_vulcanize::presentation::output;
use tb_vulcanize::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let outcome = match &cli.command {
        Commands::Bundle {
            overwrite,
            root,
            config,
            engine,
        } => commands::bundle::cmd_bundle(*overwrite, root, config.as_deref(), *engine, cli.json),
        Commands::Plan {
            overwrite,
            root,
            config,
        } => commands::plan::cmd_plan(*overwrite, root, config.as_deref(), cli.json),
    };

    if let Err(err) = &outcome {
        tracing::error!(error = %err, "command failed");
        if cli.json {
            let configuration = err
                .downcast_ref::<VulcanizeError>()
                .is_some_and(VulcanizeError::is_configuration);
            let _ = output::emit(output::error_event(&format!("{:#}", err), configuration));
        }
    }
    outcome
}
