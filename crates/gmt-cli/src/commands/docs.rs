use anyhow::Result;
use gmt_cli::config::GmtConfig;

pub fn handle(config: &GmtConfig, module: &str) -> Result<()> {
    let module = super::lookup(config, module)?;
    match &module.doc {
        Some(doc) => println!("{}", doc.trim_matches('\n')),
        None => println!("{} has no documentation", module.descriptor.name()),
    }
    Ok(())
}
