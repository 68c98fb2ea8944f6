pub mod config;
pub mod docs;
pub mod modules;
pub mod normalize;

use anyhow::{anyhow, Context, Result};
use gmt_cli::config::GmtConfig;
use gmt_cli::{DocumentedModule, ModuleRegistry};
use std::sync::Arc;

/// Build the registry and look up `name`.
pub fn lookup(config: &GmtConfig, name: &str) -> Result<Arc<DocumentedModule>> {
    let registry = ModuleRegistry::from_config(config).context("loading module declarations")?;
    registry.get(name).ok_or_else(|| {
        let known: Vec<_> = registry.names().collect();
        anyhow!(
            "unknown module '{}'; declared modules: {}",
            name,
            if known.is_empty() {
                "(none)".to_string()
            } else {
                known.join(", ")
            }
        )
    })
}
