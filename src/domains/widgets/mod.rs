//! Widgets domain module.
//!
//! A widget is a bundled HTML fragment the host renders to present a tool's
//! result. This module owns the static widget catalog:
//!
//! - `catalog.rs` - `WidgetDescriptor` and the indexed `WidgetCatalog`
//! - `registry.rs` - the fixed list of widget entries and catalog construction
//!
//! The catalog is built once at startup from bundled assets and is read-only
//! afterwards, so it can be shared across in-flight requests without locking.

mod catalog;
mod registry;

pub use catalog::{MIME_TYPE, WidgetCatalog, WidgetDescriptor};
pub use registry::{RETIREMENT_WIDGET_ID, build_catalog, build_catalog_with};

#[cfg(test)]
pub(crate) use catalog::testing as catalog_testing;
