//! Argument translation for GMT module wrappers.
//!
//! GMT modules are driven through a command-line style interface: every
//! option is a short code (`R`, `J`, `B`, ...) followed by a string value,
//! and boolean switches are expressed by the mere presence of the code. This
//! crate turns a friendlier keyword call into that form before it reaches the
//! module executor.
//!
//! # Architecture
//!
//! A call is represented as a [`CallArgs`] (positional values plus keyword
//! arguments). A [`Pipeline`] rewrites it in place through a fixed chain of
//! [`ArgTransform`] stages:
//!
//! ```text
//! CallArgs ──> AliasTable ──> ConversionTable / BoolFlags / RegionSequence ──> ModuleExecutor
//!              (friendly -> code)   (bool -> "", [1,2] -> "1/2")
//! ```
//!
//! Alias resolution always runs first because the conversion tables are keyed
//! by canonical option code.
//!
//! # Conversion kinds
//!
//! | Kind             | Input        | Output                       |
//! |------------------|--------------|------------------------------|
//! | `bool`           | `true`       | `""` (flag present)          |
//! | `bool`           | `false`      | argument removed             |
//! | `sequence`       | `[1, 2, 3]`  | `"1/2/3"`                    |
//! | `sequence_comma` | `[1, 2]`     | `"1,2"`                      |
//!
//! Values of any other type are passed through unchanged.

pub mod alias;
pub mod args;
pub mod convert;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod value;

pub use alias::AliasTable;
pub use args::CallArgs;
pub use convert::{BoolFlags, ConversionTable, RegionSequence};
pub use error::{ArgsError, ArgsResult};
pub use executor::{ModuleExecutor, RecordedCall, RecordingExecutor};
pub use pipeline::{ArgTransform, ModuleDescriptor, Pipeline, PipelineBuilder};
pub use value::ArgValue;

/// Option code holding the region of interest (`xmin/xmax/ymin/ymax`).
pub const REGION_OPTION: &str = "R";

/// The closed set of value conversions a module can declare per option code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    /// `true` becomes an empty string, `false` removes the argument.
    Bool,

    /// Sequences are joined with `/` (regions, increments, ranges).
    Sequence,

    /// Sequences are joined with `,` (column selections, color lists).
    SequenceComma,
}

impl ConversionKind {
    /// Name used in declarations and configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionKind::Bool => "bool",
            ConversionKind::Sequence => "sequence",
            ConversionKind::SequenceComma => "sequence_comma",
        }
    }

    /// Join delimiter for sequence kinds, `None` for `bool`.
    pub fn separator(&self) -> Option<&'static str> {
        match self {
            ConversionKind::Bool => None,
            ConversionKind::Sequence => Some("/"),
            ConversionKind::SequenceComma => Some(","),
        }
    }

    /// All valid conversion kinds.
    pub fn all() -> &'static [ConversionKind] {
        &[
            ConversionKind::Bool,
            ConversionKind::Sequence,
            ConversionKind::SequenceComma,
        ]
    }
}

impl std::fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ConversionKind {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(ConversionKind::Bool),
            "sequence" => Ok(ConversionKind::Sequence),
            "sequence_comma" => Ok(ConversionKind::SequenceComma),
            _ => Err(ArgsError::UnknownConversion(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_kind_parsing_accepts_declared_names() {
        for kind in ConversionKind::all() {
            assert_eq!(kind.as_str().parse::<ConversionKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn conversion_kind_parsing_is_case_sensitive() {
        assert!("Bool".parse::<ConversionKind>().is_err());
        assert!("unsupported".parse::<ConversionKind>().is_err());
    }

    #[test]
    fn conversion_kind_separators() {
        assert_eq!(ConversionKind::Bool.separator(), None);
        assert_eq!(ConversionKind::Sequence.separator(), Some("/"));
        assert_eq!(ConversionKind::SequenceComma.separator(), Some(","));
    }
}
