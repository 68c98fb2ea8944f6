use anyhow::{Context, Result};
use gmt_cli::config::GmtConfig;
use gmt_cli::ModuleRegistry;

/// List declared modules with their alias count and pipeline stages.
pub fn handle(config: &GmtConfig) -> Result<()> {
    let registry = ModuleRegistry::from_config(config).context("loading module declarations")?;
    if registry.is_empty() {
        println!("No modules declared. Create a starter file with: gmt-cli config init");
        return Ok(());
    }

    for module in registry.iter() {
        let descriptor = &module.descriptor;
        let aliases = descriptor.aliases().map(|a| a.len()).unwrap_or(0);
        println!(
            "  {:<12} {:>2} alias(es)  stages: {}",
            descriptor.name(),
            aliases,
            descriptor.pipeline().stage_names().join(" -> ")
        );
    }
    Ok(())
}
