use anyhow::Result;
use clap::Parser;
use gmt_cli::cli::{Cli, Commands};
use gmt_cli::config::{load_config, GmtConfig};
use tracing::{debug, error, warn};
use tracing_subscriber::FmtSubscriber;

mod commands;

fn main() {
    let cli = Cli::parse();

    // `config` subcommands never read the declarations, so a broken file can
    // still be located and rewritten.
    let (config, ignored) = match (load_config(cli.config.as_deref()), &cli.command) {
        (Ok(config), _) => (config, None),
        (Err(err), Commands::Config { .. }) => (GmtConfig::default(), Some(err)),
        (Err(err), _) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };

    let level = cli
        .log_level
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(tracing::Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match ignored {
        Some(err) => warn!("ignoring unreadable configuration: {err:#}"),
        None => debug!("loaded {} module declaration(s)", config.modules.len()),
    }

    if let Err(err) = run(&cli, &config) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &GmtConfig) -> Result<()> {
    match &cli.command {
        Commands::Modules => commands::modules::handle(config),
        Commands::Normalize {
            module,
            kwargs,
            positional,
            format,
        } => commands::normalize::handle(config, module, kwargs, positional, *format),
        Commands::Docs { module } => commands::docs::handle(config, module),
        Commands::Config { command } => commands::config::handle(cli.config.as_deref(), command),
    }
}
