//! Error types for documentation templating.

use handlebars::{RenderError, RenderErrorReason};
use thiserror::Error;

/// Errors raised while filling a documentation template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    /// The template references a placeholder nobody supplied.
    #[error("Missing value for placeholder '{{{{{name}}}}}'")]
    MissingPlaceholder { name: String },

    /// The template does not parse or could not be rendered.
    #[error("Malformed template: {reason}")]
    Malformed { reason: String },
}

impl From<RenderError> for DocError {
    fn from(err: RenderError) -> Self {
        match err.reason() {
            RenderErrorReason::MissingVariable(Some(name)) => DocError::MissingPlaceholder {
                name: name.clone(),
            },
            _ => DocError::Malformed {
                reason: err.to_string(),
            },
        }
    }
}

/// Result type alias for templating operations.
pub type DocResult<T> = Result<T, DocError>;
