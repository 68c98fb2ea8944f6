use anyhow::Result;
use gmt_cli::cli::ConfigCommands;
use gmt_cli::config::{gmt_config_path, init_config};
use std::path::{Path, PathBuf};

pub fn handle(path: Option<&Path>, command: &ConfigCommands) -> Result<()> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => gmt_config_path()?,
    };
    match command {
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if init_config(&path, *force)? {
                println!("Wrote {}", path.display());
            } else {
                println!("{} already exists (use --force to overwrite)", path.display());
            }
        }
    }
    Ok(())
}
