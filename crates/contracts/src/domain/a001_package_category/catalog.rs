//! Static catalog of package categories.
//!
//! The data ships inside the binary as JSON and is parsed once on first use.

use anyhow::Context;
use once_cell::sync::Lazy;

use super::aggregate::Category;

const PACKAGE_CATEGORIES_JSON: &str = include_str!("package_categories.json");

static PACKAGE_CATEGORIES: Lazy<anyhow::Result<Vec<Category>>> =
    Lazy::new(|| load_catalog(PACKAGE_CATEGORIES_JSON));

/// Parse a catalog document (a JSON array of categories).
pub fn load_catalog(json: &str) -> anyhow::Result<Vec<Category>> {
    let categories: Vec<Category> =
        serde_json::from_str(json).context("failed to parse package categories")?;
    Ok(categories)
}

/// Bundled categories in display order.
///
/// Returns the parse error of the bundled document instead of panicking;
/// callers decide how to degrade.
pub fn package_categories() -> Result<&'static [Category], &'static anyhow::Error> {
    Lazy::force(&PACKAGE_CATEGORIES).as_ref().map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::icon_tag::IconTag;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_catalog_parses() {
        let categories = package_categories().expect("bundled catalog must parse");
        assert_eq!(categories.len(), 12);
        assert_eq!(categories[0].name, "إدارة الملفات");
    }

    #[test]
    fn test_bundled_ids_are_unique() {
        let categories = package_categories().unwrap();
        let ids: HashSet<_> = categories.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), categories.len());
    }

    #[test]
    fn test_unknown_icon_in_bundle_uses_fallback() {
        let categories = package_categories().unwrap();
        let databases = categories.iter().find(|c| c.name == "قواعد البيانات").unwrap();
        assert_eq!(databases.icon, IconTag::Code);
    }

    #[test]
    fn test_malformed_catalog_reports_context() {
        let err = load_catalog("[{\"id\": 1}]").unwrap_err();
        assert!(err.to_string().contains("package categories"));
    }
}
