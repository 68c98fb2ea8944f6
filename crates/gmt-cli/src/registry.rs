//! Registry of declared modules.
//!
//! Holds each module's descriptor together with its rendered documentation.
//! Documentation is rendered when a module is registered, so template
//! mistakes surface while the registry is being built.

use crate::config::{GmtConfig, ModuleConfig};
use gmt_args::{ArgsError, ConversionTable, ModuleDescriptor, Pipeline};
use gmt_docs::{DocError, DocTemplater};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised while declaring modules.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Module '{module}': {source}")]
    Conversion {
        module: String,
        #[source]
        source: ArgsError,
    },

    #[error("Module '{module}' documentation: {source}")]
    Docs {
        module: String,
        #[source]
        source: DocError,
    },

    #[error("Module '{0}' is already registered")]
    Duplicate(String),
}

/// A module descriptor plus its rendered documentation.
#[derive(Debug, Clone)]
pub struct DocumentedModule {
    pub descriptor: ModuleDescriptor,
    pub doc: Option<String>,
}

/// Side table from module name to its declaration.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    templater: DocTemplater,
    modules: BTreeMap<String, Arc<DocumentedModule>>,
}

impl ModuleRegistry {
    pub fn new(templater: DocTemplater) -> Self {
        Self {
            templater,
            modules: BTreeMap::new(),
        }
    }

    /// Build a registry from every module declared in `config`.
    pub fn from_config(config: &GmtConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new(DocTemplater::new(config.docs.base_url.clone()));
        for (name, module) in &config.modules {
            let pipeline = build_pipeline(name, module)?;
            registry.register(ModuleDescriptor::new(name.clone(), pipeline), module.doc.as_deref())?;
        }
        Ok(registry)
    }

    /// Register a module, rendering its documentation template if given.
    pub fn register(
        &mut self,
        descriptor: ModuleDescriptor,
        raw_doc: Option<&str>,
    ) -> Result<Arc<DocumentedModule>, RegistryError> {
        let name = descriptor.name().to_string();
        if self.modules.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }

        let doc = raw_doc
            .map(|raw| {
                self.templater
                    .render_module_doc(&name, raw, descriptor.aliases())
                    .map_err(|source| RegistryError::Docs {
                        module: name.clone(),
                        source,
                    })
            })
            .transpose()?;

        debug!(
            "registered module {} with stages {:?}",
            name,
            descriptor.pipeline().stage_names()
        );
        let module = Arc::new(DocumentedModule { descriptor, doc });
        self.modules.insert(name, module.clone());
        Ok(module)
    }

    pub fn get(&self, name: &str) -> Option<Arc<DocumentedModule>> {
        self.modules.get(name).cloned()
    }

    /// Module names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentedModule> {
        self.modules.values().map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Assemble the pipeline for one declared module.
///
/// Stage order: aliases, region, declared conversions, blanket booleans.
pub fn build_pipeline(name: &str, module: &ModuleConfig) -> Result<Pipeline, RegistryError> {
    let mut builder = Pipeline::builder();
    if !module.aliases.is_empty() {
        builder = builder.aliases(module.aliases.iter().map(|(c, f)| (c.as_str(), f.as_str())));
    }
    if module.parse_region {
        builder = builder.parse_region();
    }
    if !module.conversions.is_empty() {
        let table = ConversionTable::parse(
            module
                .conversions
                .iter()
                .map(|(code, kind)| (code.as_str(), kind.as_str())),
        )
        .map_err(|source| RegistryError::Conversion {
            module: name.to_string(),
            source,
        })?;
        builder = builder.conversions(table);
    }
    if module.parse_bools {
        builder = builder.parse_bools();
    }
    Ok(builder.build())
}
