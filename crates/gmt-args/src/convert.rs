//! Value normalization into the string forms GMT options expect.

use crate::args::CallArgs;
use crate::error::{ArgsError, ArgsResult};
use crate::pipeline::ArgTransform;
use crate::value::ArgValue;
use crate::{ConversionKind, REGION_OPTION};
use std::collections::BTreeMap;
use tracing::trace;

/// Per-option conversions declared for a module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionTable {
    conversions: BTreeMap<String, ConversionKind>,
}

impl ConversionTable {
    /// Build a table from typed declarations.
    pub fn new<I, C>(conversions: I) -> Self
    where
        I: IntoIterator<Item = (C, ConversionKind)>,
        C: Into<String>,
    {
        Self {
            conversions: conversions
                .into_iter()
                .map(|(code, kind)| (code.into(), kind))
                .collect(),
        }
    }

    /// Build a table from textual declarations such as `("R", "sequence")`.
    ///
    /// Fails on the first kind outside the supported set.
    pub fn parse<I, C, K>(conversions: I) -> ArgsResult<Self>
    where
        I: IntoIterator<Item = (C, K)>,
        C: Into<String>,
        K: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (code, kind) in conversions {
            let code = code.into();
            let kind = kind.as_ref();
            let parsed = kind
                .parse::<ConversionKind>()
                .map_err(|_| ArgsError::InvalidConversion {
                    arg: code.clone(),
                    kind: kind.to_string(),
                })?;
            table.insert(code, parsed);
        }
        Ok(Self { conversions: table })
    }

    pub fn get(&self, code: &str) -> Option<ConversionKind> {
        self.conversions.get(code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ConversionKind)> {
        self.conversions
            .iter()
            .map(|(code, kind)| (code.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }

    /// Convert every declared option present in the call.
    pub fn convert(&self, args: &mut CallArgs) {
        for (code, kind) in &self.conversions {
            match kind {
                ConversionKind::Bool => bool_to_flag(args, code),
                ConversionKind::Sequence | ConversionKind::SequenceComma => {
                    if let Some(separator) = kind.separator() {
                        join_sequence(args, code, separator);
                    }
                }
            }
        }
    }
}

impl ArgTransform for ConversionTable {
    fn name(&self) -> &'static str {
        "conversions"
    }

    fn apply(&self, args: &mut CallArgs) {
        self.convert(args);
    }
}

/// Blanket boolean pass: every boolean keyword becomes a flag.
///
/// Used by modules that want flag conversion without declaring each option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolFlags;

impl ArgTransform for BoolFlags {
    fn name(&self) -> &'static str {
        "bool_flags"
    }

    fn apply(&self, args: &mut CallArgs) {
        let flags: Vec<String> = args
            .kwargs
            .iter()
            .filter(|(_, value)| matches!(value, ArgValue::Bool(_)))
            .map(|(name, _)| name.clone())
            .collect();
        for name in flags {
            bool_to_flag(args, &name);
        }
    }
}

/// Joins a sequence passed as the region option (`R`) with `/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionSequence;

impl ArgTransform for RegionSequence {
    fn name(&self) -> &'static str {
        "region"
    }

    fn apply(&self, args: &mut CallArgs) {
        join_sequence(args, REGION_OPTION, "/");
    }
}

fn bool_to_flag(args: &mut CallArgs, code: &str) {
    match args.get(code).and_then(ArgValue::as_bool) {
        Some(true) => {
            trace!("-{}: true -> flag", code);
            args.insert(code, ArgValue::Str(String::new()));
        }
        Some(false) => {
            trace!("-{}: false -> removed", code);
            args.remove(code);
        }
        None => {}
    }
}

fn join_sequence(args: &mut CallArgs, code: &str, separator: &str) {
    if let Some(joined) = args.get(code).and_then(|value| value.join(separator)) {
        trace!("-{}: sequence -> '{}'", code, joined);
        args.insert(code, ArgValue::Str(joined));
    }
}
