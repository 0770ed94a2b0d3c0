use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "llm-setup", about = "Configure LLM providers interactively")]
pub struct CliArgs {
    /// Path to the configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a provider setup step and save the result
    Configure(ConfigureArgs),
    /// Print the configured providers
    Show {
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// List the auth choices that have a setup step
    Choices,
}

#[derive(clap::Args, Debug, Default)]
pub struct ConfigureArgs {
    /// Auth choice tag, e.g. `ollama-api`; asked for when omitted
    #[arg(long)]
    pub auth_choice: Option<String>,
    /// Answer for the base URL prompt in non-interactive mode
    #[arg(long, requires = "non_interactive")]
    pub base_url: Option<String>,
    /// Never read from the terminal; unanswered prompts take their defaults
    #[arg(long)]
    pub non_interactive: bool,
    /// In non-interactive mode, keep the config unchanged when the endpoint is unreachable
    #[arg(long, requires = "non_interactive")]
    pub abort_if_unreachable: bool,
}

impl ConfigureArgs {
    pub fn is_interactive(&self) -> bool {
        !self.non_interactive
    }
}
