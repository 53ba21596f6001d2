//! Widget Registry - the fixed list of widgets served by this demo.
//!
//! Each entry names the asset component carrying its HTML body. Catalog
//! construction loads every body up front; a missing asset fails construction
//! so the server never starts with a partial catalog.

use tracing::info;

use super::catalog::{WidgetCatalog, WidgetDescriptor};
use crate::core::assets::{AssetError, AssetStore};

/// Identifier of the widget backing the retirement estimator tool.
pub const RETIREMENT_WIDGET_ID: &str = "retirement-income-estimator";

/// Static metadata for one registry entry; the HTML body comes from assets.
struct WidgetSpec {
    identifier: &'static str,
    title: &'static str,
    invoking: &'static str,
    invoked: &'static str,
    /// Asset component name (file stem in the assets directory).
    component: &'static str,
    response_text: &'static str,
}

const WIDGET_SPECS: &[WidgetSpec] = &[
    WidgetSpec {
        identifier: "pizza-map",
        title: "Show Pizza Map",
        invoking: "Hand-tossing a map",
        invoked: "Served a fresh map",
        component: "pizzaz",
        response_text: "Rendered a pizza map!",
    },
    WidgetSpec {
        identifier: "pizza-carousel",
        title: "Show Pizza Carousel",
        invoking: "Carousel some spots",
        invoked: "Served a fresh carousel",
        component: "pizzaz-carousel",
        response_text: "Rendered a pizza carousel!",
    },
    WidgetSpec {
        identifier: "pizza-albums",
        title: "Show Pizza Album",
        invoking: "Hand-tossing an album",
        invoked: "Served a fresh album",
        component: "pizzaz-albums",
        response_text: "Rendered a pizza album!",
    },
    WidgetSpec {
        identifier: "pizza-list",
        title: "Show Pizza List",
        invoking: "Hand-tossing a list",
        invoked: "Served a fresh list",
        component: "pizzaz-list",
        response_text: "Rendered a pizza list!",
    },
    WidgetSpec {
        identifier: RETIREMENT_WIDGET_ID,
        title: "Retirement Income Estimator",
        invoking: "Preparing income estimator…",
        invoked: "Retirement income estimator ready.",
        component: "star",
        response_text: "Rendered retirement income estimator!",
    },
];

/// Build the widget catalog, loading each HTML body from the asset store.
pub fn build_catalog(assets: &AssetStore) -> Result<WidgetCatalog, AssetError> {
    info!("Building widget catalog from {:?}", assets.dir());
    build_catalog_with(|component| assets.load_html(component))
}

/// Build the widget catalog with a custom HTML loader.
///
/// The loader is called once per registry entry with the asset component name.
pub fn build_catalog_with<F>(mut load_html: F) -> Result<WidgetCatalog, AssetError>
where
    F: FnMut(&str) -> Result<String, AssetError>,
{
    let mut widgets = Vec::with_capacity(WIDGET_SPECS.len());

    for spec in WIDGET_SPECS {
        widgets.push(WidgetDescriptor {
            identifier: spec.identifier.to_string(),
            title: spec.title.to_string(),
            template_uri: format!("ui://widget/{}.html", spec.identifier),
            invoking: spec.invoking.to_string(),
            invoked: spec.invoked.to_string(),
            html: load_html(spec.component)?,
            response_text: spec.response_text.to_string(),
        });
    }

    Ok(WidgetCatalog::new(widgets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_catalog_has_all_widgets() {
        let catalog = build_catalog_with(|c| Ok(format!("<div>{c}</div>"))).unwrap();

        assert_eq!(catalog.len(), 5);
        for id in [
            "pizza-map",
            "pizza-carousel",
            "pizza-albums",
            "pizza-list",
            RETIREMENT_WIDGET_ID,
        ] {
            assert!(catalog.resolve_by_id(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn test_identifiers_and_uris_are_unique() {
        let catalog = build_catalog_with(|_| Ok(String::new())).unwrap();

        let ids: HashSet<_> = catalog.iter().map(|w| w.identifier.as_str()).collect();
        let uris: HashSet<_> = catalog.iter().map(|w| w.template_uri.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(uris.len(), catalog.len());
    }

    #[test]
    fn test_template_uri_scheme() {
        let catalog = build_catalog_with(|_| Ok(String::new())).unwrap();

        for widget in catalog.iter() {
            assert_eq!(
                widget.template_uri,
                format!("ui://widget/{}.html", widget.identifier)
            );
        }
    }

    #[test]
    fn test_retirement_widget_uses_star_component() {
        let catalog = build_catalog_with(|c| Ok(c.to_string())).unwrap();

        let widget = catalog.resolve_by_id(RETIREMENT_WIDGET_ID).unwrap();
        assert_eq!(widget.html, "star");
        assert_eq!(widget.response_text, "Rendered retirement income estimator!");
    }

    #[test]
    fn test_build_from_asset_directory() {
        let dir = TempDir::new().unwrap();
        for component in [
            "pizzaz",
            "pizzaz-carousel",
            "pizzaz-albums",
            "pizzaz-list",
            "star",
        ] {
            fs::write(
                dir.path().join(format!("{component}.html")),
                format!("<main>{component}</main>"),
            )
            .unwrap();
        }

        let store = AssetStore::new(dir.path());
        let catalog = build_catalog(&store).unwrap();

        let map = catalog.resolve_by_id("pizza-map").unwrap();
        assert_eq!(map.html, "<main>pizzaz</main>");
    }

    #[test]
    fn test_missing_asset_fails_construction() {
        let dir = TempDir::new().unwrap();
        // Only one of the five components present.
        fs::write(dir.path().join("pizzaz.html"), "<div></div>").unwrap();

        let store = AssetStore::new(dir.path());
        assert!(build_catalog(&store).is_err());
    }
}
