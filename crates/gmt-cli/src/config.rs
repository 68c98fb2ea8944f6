//! Configuration for module declarations, documentation and logging.
//! The default file lives at ~/.gmt/config/gmt.toml

use anyhow::{anyhow, Context, Result};
use gmt_docs::GMT_DOCS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GmtConfig {
    /// Documentation templating
    #[serde(default)]
    pub docs: DocsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Declared modules, keyed by GMT module name
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocsConfig {
    /// Base URL used for `{{gmt_module_docs}}` links
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    GMT_DOCS.to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Declaration of one wrapped module.
///
/// Conversion kinds are kept as text here and validated when the registry is
/// built, so a bad kind fails at load time with the module name attached.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModuleConfig {
    /// Canonical option code -> friendly name
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Canonical option code -> `bool` | `sequence` | `sequence_comma`
    #[serde(default)]
    pub conversions: BTreeMap<String, String>,
    /// Join a sequence passed as `R` with `/`
    #[serde(default)]
    pub parse_region: bool,
    /// Convert every boolean argument into a flag
    #[serde(default)]
    pub parse_bools: bool,
    /// Documentation template
    #[serde(default)]
    pub doc: Option<String>,
}

/// Starter configuration written by `gmt-cli config init`.
pub const STARTER_CONFIG: &str = r#"# GMT module declarations
# Location: ~/.gmt/config/gmt.toml

[docs]
base_url = "http://gmt.soest.hawaii.edu/doc/latest"

[logging]
level = "info"

[modules.info]
aliases = { C = "per_column", I = "spacing", T = "nearest_multiple" }
conversions = { C = "bool", I = "sequence" }
doc = """
Get information about data tables.

{{gmt_module_docs}}

{{aliases}}
"""

[modules.basemap]
aliases = { R = "region", J = "projection", B = "frame", P = "portrait", U = "timestamp" }
conversions = { R = "sequence", P = "bool", U = "bool" }
doc = """
Produce a basemap for the figure.

{{gmt_module_docs}}

{{aliases}}

Parameters
----------
{{J}}
{{R}}
{{B}}
{{P}}
{{U}}
"""

[modules.coast]
aliases = { R = "region", J = "projection", B = "frame", D = "resolution", I = "rivers", N = "borders", W = "shorelines", G = "land", S = "water" }
conversions = { R = "sequence" }
doc = """
Plot continents, shorelines, rivers, and borders on maps.

{{gmt_module_docs}}

{{aliases}}

Parameters
----------
{{J}}
{{R}}
{{G}}
{{W}}
"""

[modules.psconvert]
aliases = { F = "prefix", T = "fmt", A = "crop", E = "dpi", P = "portrait", I = "icc_gray" }
parse_bools = true
"#;

/// Get the GMT home directory (defaults to ~/.gmt)
pub fn gmt_home() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| anyhow!("Cannot determine home directory"))
        .map(|h| h.join(".gmt"))
}

/// Get the path to the main configuration file
/// Location: ~/.gmt/config/gmt.toml
pub fn gmt_config_path() -> Result<PathBuf> {
    Ok(gmt_home()?.join("config").join("gmt.toml"))
}

/// Load configuration from `path`, or the default location.
///
/// A missing file yields the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<GmtConfig> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => gmt_config_path()?,
    };

    if !config_path.exists() {
        return Ok(GmtConfig::default());
    }

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    parse_config(&contents).with_context(|| format!("parsing {}", config_path.display()))
}

pub fn parse_config(contents: &str) -> Result<GmtConfig> {
    Ok(toml::from_str(contents)?)
}

/// Write the starter configuration unless a file exists (or `force`).
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(path, STARTER_CONFIG).with_context(|| format!("writing {}", path.display()))?;
    Ok(true)
}
