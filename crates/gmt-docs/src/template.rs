//! Placeholder substitution and indentation normalization.

use crate::error::DocResult;
use crate::options::{alias_listing, module_docs_link, COMMON_OPTIONS, GMT_DOCS};
use gmt_args::AliasTable;
use handlebars::{no_escape, Handlebars};
use std::collections::BTreeMap;
use tracing::debug;

/// Remove the whitespace prefix shared by every non-blank line.
///
/// Lines made only of spaces and tabs are normalized to empty lines and do
/// not take part in computing the shared prefix.
pub fn dedent(text: &str) -> String {
    let is_blank = |line: &str| line.chars().all(|c| c == ' ' || c == '\t');

    let mut margin: Option<&str> = None;
    for line in text.split('\n').filter(|line| !is_blank(line)) {
        let indent = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin = margin.unwrap_or("");

    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map(|((i, c), _)| i + c.len_utf8())
        .unwrap_or(0);
    &a[..len]
}

/// Fill `{{name}}` placeholders in `template` from `values`.
///
/// Rendering is strict: every referenced placeholder must be present in
/// `values`. Unreferenced values are ignored and `\{{` produces literal
/// braces. Values are inserted verbatim, without HTML escaping.
pub fn render(template: &str, values: &BTreeMap<String, String>) -> DocResult<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(no_escape);
    Ok(handlebars.render_template(template, values)?)
}

/// Fills module documentation with links, alias listings and shared option
/// descriptions.
#[derive(Debug, Clone)]
pub struct DocTemplater {
    base_url: String,
}

impl Default for DocTemplater {
    fn default() -> Self {
        Self::new(GMT_DOCS)
    }
}

impl DocTemplater {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Values available to a module's documentation.
    ///
    /// `aliases` is only offered when the module declares an alias table.
    pub fn fill_values(&self, module: &str, aliases: Option<&AliasTable>) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        values.insert(
            "gmt_module_docs".to_string(),
            module_docs_link(&self.base_url, module),
        );
        if let Some(aliases) = aliases {
            values.insert("aliases".to_string(), alias_listing(aliases));
        }
        for (marker, text) in COMMON_OPTIONS {
            values.insert(
                marker.to_string(),
                dedent(text).trim_start_matches('\n').to_string(),
            );
        }
        values
    }

    /// Dedent `raw` and substitute every placeholder for `module`.
    pub fn render_module_doc(
        &self,
        module: &str,
        raw: &str,
        aliases: Option<&AliasTable>,
    ) -> DocResult<String> {
        debug!("rendering documentation for {}", module);
        let values = self.fill_values(module, aliases);
        render(&dedent(raw), &values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocError;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn dedent_removes_common_margin() {
        let text = "\n    first\n      nested\n    last\n    ";
        assert_eq!(dedent(text), "\nfirst\n  nested\nlast\n");
    }

    #[test]
    fn dedent_ignores_blank_lines_for_margin() {
        let text = "  a\n\n \n  b";
        assert_eq!(dedent(text), "a\n\n\nb");
    }

    #[test]
    fn dedent_without_common_margin_is_unchanged() {
        assert_eq!(dedent("a\n  b"), "a\n  b");
        assert_eq!(dedent("\ta\n  b"), "\ta\n  b");
    }

    #[test]
    fn render_substitutes_and_ignores_unused_values() {
        let out = render("{{a}} and {{b}}", &values(&[("a", "1"), ("b", "2"), ("c", "3")])).unwrap();
        assert_eq!(out, "1 and 2");
    }

    #[test]
    fn render_keeps_escaped_braces() {
        let out = render("C=\\{{x}} {{a}}", &values(&[("a", "y")])).unwrap();
        assert_eq!(out, "C={{x}} y");
    }

    #[test]
    fn render_inserts_values_verbatim() {
        let out = render("{{R}}", &values(&[("R", "``'xmin/xmax'`` & <ymin>")])).unwrap();
        assert_eq!(out, "``'xmin/xmax'`` & <ymin>");
    }

    #[test]
    fn render_fails_on_missing_placeholder() {
        let err = render("{{R}}\n{{typo}}", &values(&[("R", "region")])).unwrap_err();
        assert_eq!(
            err,
            DocError::MissingPlaceholder {
                name: "typo".into()
            }
        );
    }

    #[test]
    fn render_fails_on_unbalanced_braces() {
        assert!(matches!(
            render("open {{R", &values(&[("R", "x")])),
            Err(DocError::Malformed { .. })
        ));
        assert!(matches!(
            render("{{#if R}}never closed", &values(&[("R", "x")])),
            Err(DocError::Malformed { .. })
        ));
    }

    #[test]
    fn fill_values_omit_aliases_without_table() {
        let templater = DocTemplater::default();
        let without = templater.fill_values("info", None);
        assert!(!without.contains_key("aliases"));
        let with = templater.fill_values("info", Some(&AliasTable::new([("C", "per_column")])));
        assert_eq!(with["aliases"], "**Aliases:**\n\n- C = per_column");
    }

    #[test]
    fn common_blocks_are_dedented() {
        let templater = DocTemplater::default();
        let filled = templater.fill_values("plot", None);
        assert_eq!(
            filled["W"],
            "W : str\n    Set pen attributes for lines or the outline of symbols."
        );
        assert!(filled["CPT"].starts_with("C : str\n   File name"));
    }
}
