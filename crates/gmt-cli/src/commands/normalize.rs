use anyhow::{Context, Result};
use gmt_args::{ArgValue, CallArgs};
use gmt_cli::cli::OutputFormat;
use gmt_cli::config::GmtConfig;
use tracing::info;

/// Normalize one call and print it as an argument string or JSON.
pub fn handle(
    config: &GmtConfig,
    module: &str,
    kwargs: &str,
    positional: &[String],
    format: OutputFormat,
) -> Result<()> {
    let module = super::lookup(config, module)?;

    let kwargs: serde_json::Value =
        serde_json::from_str(kwargs).context("keyword arguments are not valid JSON")?;
    let mut args = CallArgs::from_json_kwargs(kwargs)?;
    args.positional = positional.iter().map(|raw| positional_value(raw)).collect();

    let args = module.descriptor.prepare(args);
    info!(
        "normalized {} call: {} keyword(s)",
        module.descriptor.name(),
        args.kwargs.len()
    );

    match format {
        OutputFormat::Args => println!("{}", args.to_arg_string()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&args)?),
    }
    Ok(())
}

/// Numbers and booleans are recognized, anything else is taken verbatim.
fn positional_value(raw: &str) -> ArgValue {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| match value {
            serde_json::Value::Bool(_) | serde_json::Value::Number(_) => {
                ArgValue::from_json(value).ok()
            }
            _ => None,
        })
        .unwrap_or_else(|| ArgValue::from(raw))
}
