//! Docstring templating for GMT module wrappers.
//!
//! Module documentation is written once as a handlebars template with
//! `{{placeholder}}` markers and filled in when the module is registered:
//!
//! | Placeholder           | Replacement |
//! |-----------------------|-------------|
//! | `{{gmt_module_docs}}` | link to the upstream GMT page for the module |
//! | `{{aliases}}`         | sorted `- <code> = <name>` listing of the alias table |
//! | `{{R}}` `{{J}}` `{{B}}` `{{P}}` `{{U}}` `{{CPT}}` `{{G}}` `{{W}}` | shared option descriptions |
//!
//! Templates render in strict mode: an unknown placeholder is an error, and a
//! typo in a module's documentation is caught when the module is declared.

pub mod error;
pub mod options;
pub mod template;

pub use error::{DocError, DocResult};
pub use options::{alias_listing, module_docs_link, COMMON_OPTIONS, GMT_DOCS};
pub use template::{dedent, render, DocTemplater};
