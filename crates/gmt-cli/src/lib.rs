pub mod cli;
pub mod config;
pub mod registry;

pub use cli::{build_cli_command, Cli, Commands, ConfigCommands, OutputFormat};
pub use registry::{DocumentedModule, ModuleRegistry, RegistryError};
