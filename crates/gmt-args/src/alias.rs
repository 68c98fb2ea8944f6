//! Alias resolution: friendly keyword names to canonical option codes.

use crate::args::CallArgs;
use crate::pipeline::ArgTransform;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Mapping from canonical option code to its friendly name.
///
/// Stored sorted by canonical code, which is also the order used when the
/// table is rendered into documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    /// Build a table from `(canonical, friendly)` pairs.
    ///
    /// A canonical code declared twice keeps the later friendly name.
    pub fn new<I, C, F>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, F)>,
        C: Into<String>,
        F: Into<String>,
    {
        let mut aliases = BTreeMap::new();
        for (canonical, friendly) in pairs {
            let canonical = canonical.into();
            let friendly = friendly.into();
            if let Some(previous) = aliases.insert(canonical.clone(), friendly.clone()) {
                debug!(
                    "alias for -{} redeclared: '{}' replaces '{}'",
                    canonical, friendly, previous
                );
            }
        }
        Self { aliases }
    }

    /// Move every friendly-named keyword onto its canonical code.
    ///
    /// When both names are supplied the friendly value wins.
    pub fn resolve(&self, args: &mut CallArgs) {
        for (canonical, friendly) in &self.aliases {
            if let Some(value) = args.remove(friendly) {
                trace!("resolved alias {} -> {}", friendly, canonical);
                args.insert(canonical.clone(), value);
            }
        }
    }

    /// Friendly name registered for a canonical code.
    pub fn friendly(&self, canonical: &str) -> Option<&str> {
        self.aliases.get(canonical).map(String::as_str)
    }

    /// Canonical code a friendly name resolves to.
    pub fn canonical(&self, friendly: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(_, name)| name.as_str() == friendly)
            .map(|(code, _)| code.as_str())
    }

    /// `(canonical, friendly)` pairs in ascending canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<C: Into<String>, F: Into<String>> FromIterator<(C, F)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (C, F)>>(iter: I) -> Self {
        AliasTable::new(iter)
    }
}

impl ArgTransform for AliasTable {
    fn name(&self) -> &'static str {
        "aliases"
    }

    fn apply(&self, args: &mut CallArgs) {
        self.resolve(args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ArgValue;

    fn table() -> AliasTable {
        AliasTable::new([("R", "region"), ("J", "projection")])
    }

    #[test]
    fn friendly_and_canonical_names_are_equivalent() {
        let table = table();
        let combos = [
            CallArgs::new().kwarg("R", "bla").kwarg("J", "meh"),
            CallArgs::new().kwarg("region", "bla").kwarg("J", "meh"),
            CallArgs::new().kwarg("R", "bla").kwarg("projection", "meh"),
            CallArgs::new().kwarg("region", "bla").kwarg("projection", "meh"),
        ];
        for mut args in combos {
            table.resolve(&mut args);
            assert_eq!(args.get("R"), Some(&ArgValue::from("bla")));
            assert_eq!(args.get("J"), Some(&ArgValue::from("meh")));
            assert_eq!(args.kwargs.len(), 2);
        }
    }

    #[test]
    fn friendly_name_wins_over_canonical() {
        let mut args = CallArgs::new().kwarg("R", "canonical").kwarg("region", "friendly");
        table().resolve(&mut args);
        assert_eq!(args.get("R"), Some(&ArgValue::from("friendly")));
        assert!(!args.contains("region"));
    }

    #[test]
    fn positional_and_unknown_keywords_are_untouched() {
        let mut args = CallArgs::new().arg("grid.nc").kwarg("verbose", true);
        let before = args.clone();
        table().resolve(&mut args);
        assert_eq!(args, before);
    }

    #[test]
    fn iteration_is_sorted_by_canonical_code() {
        let table = AliasTable::new([("W", "pen"), ("B", "frame"), ("J", "projection")]);
        let codes: Vec<_> = table.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["B", "J", "W"]);
    }

    #[test]
    fn redeclared_code_keeps_last_name() {
        let table = AliasTable::new([("R", "region"), ("R", "limits")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.friendly("R"), Some("limits"));
        assert_eq!(table.canonical("limits"), Some("R"));
        assert_eq!(table.canonical("region"), None);
    }
}
