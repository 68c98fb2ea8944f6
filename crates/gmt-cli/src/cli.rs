use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level (defaults to `logging.level` from the config)
    #[arg(long)]
    pub log_level: Option<tracing::Level>,

    /// Configuration file (defaults to ~/.gmt/config/gmt.toml)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List declared modules
    Modules,
    /// Normalize a module call without executing it
    Normalize {
        /// Module name
        module: String,
        /// Keyword arguments as a JSON object, e.g. '{"region": [0, 10, 0, 5]}'
        #[arg(long, default_value = "{}")]
        kwargs: String,
        /// Positional values passed through unchanged
        #[arg(long = "arg")]
        positional: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Args)]
        format: OutputFormat,
    },
    /// Print a module's rendered documentation
    Docs {
        /// Module name
        module: String,
    },
    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the configuration file path in use
    Path,
    /// Write a starter configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// GMT argument string
    Args,
    /// Normalized call as JSON
    Json,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
