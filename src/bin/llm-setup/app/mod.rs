mod commands;

use clap::Parser;

use llm_setup::config::load_config;
use llm_setup::AuthChoiceDispatcher;

use crate::args::{CliArgs, Command};
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let prompting = match &args.command {
        Command::Configure(opts) => commands::is_interactive(opts),
        _ => false,
    };
    let _logger = init_logging(&loaded.config.logging(), &loaded.paths.logs_dir, !prompting)?;
    let dispatcher = AuthChoiceDispatcher::with_defaults();

    match &args.command {
        Command::Configure(opts) => commands::configure(opts, loaded, &dispatcher).await,
        Command::Show { json } => commands::show(&loaded.config, *json),
        Command::Choices => {
            commands::list_choices(&dispatcher);
            Ok(())
        }
    }
}

