//! Composition of argument transforms into a per-module pipeline.
//!
//! Stages run in a fixed order: alias resolution first, then the value
//! normalizers in the order they were added to the builder.
//!
//! ```rust
//! use gmt_args::{CallArgs, ConversionTable, Pipeline};
//!
//! let conversions = ConversionTable::parse([("R", "sequence"), ("P", "bool")]).unwrap();
//! let pipeline = Pipeline::builder()
//!     .aliases([("R", "region"), ("P", "portrait")])
//!     .conversions(conversions)
//!     .build();
//!
//! let args = pipeline.prepare(CallArgs::new().kwarg("region", [0, 10, 0, 5]).kwarg("portrait", true));
//! assert_eq!(args.to_arg_string(), "-P -R0/10/0/5");
//! ```

use crate::alias::AliasTable;
use crate::args::CallArgs;
use crate::convert::{BoolFlags, ConversionTable, RegionSequence};
use crate::error::ArgsResult;
use crate::executor::ModuleExecutor;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// One in-place rewrite of a call's arguments.
///
/// Implementations must not fail: any argument they do not recognize is left
/// as it is.
pub trait ArgTransform: Send + Sync {
    /// Stage name used in logs.
    fn name(&self) -> &'static str;

    /// Rewrite the call's keyword arguments.
    fn apply(&self, args: &mut CallArgs);
}

/// Ordered chain of transforms for one module.
#[derive(Clone, Default)]
pub struct Pipeline {
    aliases: Option<Arc<AliasTable>>,
    stages: Vec<Arc<dyn ArgTransform>>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Alias table of the pipeline, if one was declared.
    pub fn aliases(&self) -> Option<&AliasTable> {
        self.aliases.as_deref()
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.aliases
            .iter()
            .map(|a| a.name())
            .chain(self.stages.iter().map(|s| s.name()))
            .collect()
    }

    /// Run every stage over `args` in place.
    pub fn apply(&self, args: &mut CallArgs) {
        if let Some(aliases) = &self.aliases {
            aliases.apply(args);
            debug!("stage {}: {} keyword(s)", aliases.name(), args.kwargs.len());
        }
        for stage in &self.stages {
            stage.apply(args);
            debug!("stage {}: {} keyword(s)", stage.name(), args.kwargs.len());
        }
    }

    /// Consume a call and return its normalized form.
    pub fn prepare(&self, mut args: CallArgs) -> CallArgs {
        self.apply(&mut args);
        args
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Builder for [`Pipeline`].
#[derive(Default)]
pub struct PipelineBuilder {
    aliases: Option<AliasTable>,
    stages: Vec<Arc<dyn ArgTransform>>,
}

impl PipelineBuilder {
    /// Declare the alias table. Always resolved before any other stage.
    pub fn aliases<I, C, F>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, F)>,
        C: Into<String>,
        F: Into<String>,
    {
        self.aliases = Some(AliasTable::new(pairs));
        self
    }

    pub fn alias_table(mut self, table: AliasTable) -> Self {
        self.aliases = Some(table);
        self
    }

    pub fn conversions(self, table: ConversionTable) -> Self {
        self.stage(table)
    }

    /// Convert every boolean keyword into a flag.
    pub fn parse_bools(self) -> Self {
        self.stage(BoolFlags)
    }

    /// Join a sequence passed as `R` with `/`.
    pub fn parse_region(self) -> Self {
        self.stage(RegionSequence)
    }

    /// Append a custom normalizer stage.
    pub fn stage<T: ArgTransform + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            aliases: self.aliases.map(Arc::new),
            stages: self.stages,
        }
    }
}

/// A wrapped module: its name, alias metadata and argument pipeline.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    name: String,
    pipeline: Pipeline,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, pipeline: Pipeline) -> Self {
        Self {
            name: name.into(),
            pipeline,
        }
    }

    /// GMT module name (e.g. `info`, `grdimage`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> Option<&AliasTable> {
        self.pipeline.aliases()
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Normalize a call without executing it.
    pub fn prepare(&self, args: CallArgs) -> CallArgs {
        debug!("preparing call to {}", self.name);
        self.pipeline.prepare(args)
    }

    /// Normalize a call and hand it to `executor`.
    pub fn invoke<E: ModuleExecutor>(&self, args: CallArgs, executor: &E) -> ArgsResult<E::Output> {
        let args = self.prepare(args);
        executor.call_module(&self.name, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::RecordingExecutor;
    use crate::value::ArgValue;
    use crate::ConversionKind;

    struct Uppercase;

    impl ArgTransform for Uppercase {
        fn name(&self) -> &'static str {
            "uppercase"
        }

        fn apply(&self, args: &mut CallArgs) {
            for value in args.kwargs.values_mut() {
                if let ArgValue::Str(s) = value {
                    *s = s.to_uppercase();
                }
            }
        }
    }

    #[test]
    fn aliases_run_before_conversions() {
        let pipeline = Pipeline::builder()
            .conversions(ConversionTable::new([("R", ConversionKind::Sequence)]))
            .aliases([("R", "region")])
            .build();

        let args = pipeline.prepare(CallArgs::new().kwarg("region", [1, 2, 3, 4]));
        assert_eq!(args.get("R"), Some(&ArgValue::from("1/2/3/4")));
        assert_eq!(pipeline.stage_names(), vec!["aliases", "conversions"]);
    }

    #[test]
    fn normalizers_run_in_insertion_order() {
        let pipeline = Pipeline::builder()
            .parse_region()
            .stage(Uppercase)
            .parse_bools()
            .build();
        assert_eq!(
            pipeline.stage_names(),
            vec!["region", "uppercase", "bool_flags"]
        );

        let args = pipeline.prepare(CallArgs::new().kwarg("R", ["a", "b"]).kwarg("P", true));
        assert_eq!(args.get("R"), Some(&ArgValue::from("A/B")));
        assert_eq!(args.get("P"), Some(&ArgValue::from("")));
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::default();
        let args = CallArgs::new().arg(1).kwarg("x", vec![1, 2]);
        assert_eq!(pipeline.prepare(args.clone()), args);
        assert!(pipeline.aliases().is_none());
    }

    #[test]
    fn descriptor_invokes_executor_with_normalized_args() {
        let module = ModuleDescriptor::new(
            "info",
            Pipeline::builder()
                .aliases([("I", "spacing")])
                .conversions(ConversionTable::new([("I", ConversionKind::Sequence)]))
                .build(),
        );
        let executor = RecordingExecutor::default();
        let line = module
            .invoke(CallArgs::new().arg("table.txt").kwarg("spacing", [1, 2]), &executor)
            .unwrap();

        assert_eq!(line, "table.txt -I1/2");
        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].module, "info");
        assert_eq!(calls[0].args.get("I"), Some(&ArgValue::from("1/2")));
        assert_eq!(module.aliases().and_then(|a| a.friendly("I")), Some("spacing"));
    }
}
