//! Error types for module argument handling.

use thiserror::Error;

/// Errors that can occur while declaring or invoking a module.
///
/// None of these are produced while a call is being normalized: type
/// mismatches and duplicate aliases are defined, silent behaviors.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// A conversion kind name outside `bool`, `sequence`, `sequence_comma`.
    #[error("Unknown conversion type '{0}'")]
    UnknownConversion(String),

    /// A conversion table was declared with an invalid kind for an argument.
    #[error("Invalid conversion type '{kind}' for argument '{arg}'")]
    InvalidConversion { arg: String, kind: String },

    /// A value that has no argument representation (null, objects).
    #[error("Unsupported argument value: {0}")]
    UnsupportedValue(String),

    /// The module executor rejected or failed the call.
    #[error("Module {module} failed: {message}")]
    Executor { module: String, message: String },
}

/// Result type alias for argument operations.
pub type ArgsResult<T> = Result<T, ArgsError>;
