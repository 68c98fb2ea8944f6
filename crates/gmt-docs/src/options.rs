//! Fixed reference text shared by every module's documentation.

use gmt_args::AliasTable;

/// Base URL of the upstream GMT module documentation.
pub const GMT_DOCS: &str = "http://gmt.soest.hawaii.edu/doc/latest";

/// Descriptions of options shared across modules, keyed by placeholder.
///
/// The blocks keep their source indentation and are dedented before they are
/// substituted.
pub const COMMON_OPTIONS: &[(&str, &str)] = &[
    (
        "R",
        r#"
        R : str or list
            *Required if this is the first plot command*.
            ``'xmin/xmax/ymin/ymax[+r][+uunit]'``.
            Specify the region of interest."#,
    ),
    (
        "J",
        r#"
        J : str
            *Required if this is the first plot command*.
            Select map projection."#,
    ),
    (
        "B",
        r#"
        B : str
            Set map boundary frame and axes attributes."#,
    ),
    (
        "P",
        r#"
        P : bool
            Select "Portrait" plot orientation."#,
    ),
    (
        "U",
        r#"
        U : bool or str
            Draw GMT time stamp logo on plot."#,
    ),
    (
        "CPT",
        r#"
        C : str
           File name of a CPT file or ``C='color1,color2[,color3,...]'`` to
           build a linear continuous CPT from those colors automatically."#,
    ),
    (
        "G",
        r#"
        G : str
            Select color or pattern for filling of symbols or polygons. Default
            is no fill."#,
    ),
    (
        "W",
        r#"
        W : str
            Set pen attributes for lines or the outline of symbols."#,
    ),
];

/// `Full option list at <base>/<module>.html`
pub fn module_docs_link(base_url: &str, module: &str) -> String {
    format!(
        "Full option list at {}/{}.html",
        base_url.trim_end_matches('/'),
        module
    )
}

/// Alias section listing every alias in ascending canonical order.
pub fn alias_listing(aliases: &AliasTable) -> String {
    let mut lines = vec!["**Aliases:**\n".to_string()];
    lines.extend(
        aliases
            .iter()
            .map(|(code, name)| format!("- {} = {}", code, name)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_uses_module_name() {
        assert_eq!(
            module_docs_link(GMT_DOCS, "grdimage"),
            "Full option list at http://gmt.soest.hawaii.edu/doc/latest/grdimage.html"
        );
        assert_eq!(
            module_docs_link("https://docs.generic-mapping-tools.org/6.5/", "info"),
            "Full option list at https://docs.generic-mapping-tools.org/6.5/info.html"
        );
    }

    #[test]
    fn listing_is_sorted_regardless_of_declaration_order() {
        let aliases = AliasTable::new([("R", "region"), ("J", "projection"), ("B", "frame")]);
        assert_eq!(
            alias_listing(&aliases),
            "**Aliases:**\n\n- B = frame\n- J = projection\n- R = region"
        );
    }

    #[test]
    fn empty_table_lists_only_the_heading() {
        assert_eq!(alias_listing(&AliasTable::default()), "**Aliases:**\n");
    }

    #[test]
    fn every_common_option_is_unique() {
        let mut keys: Vec<_> = COMMON_OPTIONS.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), COMMON_OPTIONS.len());
    }
}
