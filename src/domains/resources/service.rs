//! Resource service implementation.
//!
//! The ResourceService answers listing and read requests for widget markup.
//! It is a thin resolver over the widget catalog: every catalog entry is one
//! resource, addressed by its template URI.

use std::sync::Arc;

use rmcp::model::{
    AnnotateAble, RawResource, RawResourceTemplate, ReadResourceResult, Resource, ResourceTemplate,
};
use tracing::info;

use super::error::ResourceError;
use crate::domains::widgets::{MIME_TYPE, WidgetCatalog, WidgetDescriptor};

/// Service for listing and reading widget resources.
pub struct ResourceService {
    catalog: Arc<WidgetCatalog>,
}

impl ResourceService {
    /// Create a new ResourceService over a built catalog.
    pub fn new(catalog: Arc<WidgetCatalog>) -> Self {
        info!(
            "Initializing ResourceService with {} widget resources",
            catalog.len()
        );
        Self { catalog }
    }

    /// List all widget resources in catalog order.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.catalog.iter().map(resource_model).collect()
    }

    /// List widget resource templates in catalog order.
    ///
    /// The template URIs are fixed per widget; they are published so hosts
    /// that discover templates see the same set as the resource listing.
    pub fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.catalog
            .iter()
            .map(|widget| {
                RawResourceTemplate {
                    uri_template: widget.template_uri.clone(),
                    name: widget.title.clone(),
                    title: Some(widget.title.clone()),
                    description: Some(widget.resource_description()),
                    mime_type: Some(MIME_TYPE.to_string()),
                }
                .no_annotation()
            })
            .collect()
    }

    /// Read widget markup by template URI.
    pub fn read(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let widget = self
            .catalog
            .resolve_by_uri(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        Ok(ReadResourceResult {
            contents: vec![widget.resource_contents()],
        })
    }
}

/// Build the listing model for one widget.
fn resource_model(widget: &WidgetDescriptor) -> Resource {
    let mut raw = RawResource::new(&widget.template_uri, widget.title.clone());
    raw.description = Some(widget.resource_description());
    raw.mime_type = Some(MIME_TYPE.to_string());
    raw.no_annotation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::widgets::catalog_testing::sample_catalog;
    use rmcp::model::ResourceContents;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(sample_catalog()))
    }

    #[test]
    fn test_lists_one_resource_per_widget() {
        let resources = service().list_resources();
        assert_eq!(resources.len(), 5);

        let uris: Vec<_> = resources.iter().map(|r| r.raw.uri.as_str()).collect();
        assert!(uris.contains(&"ui://widget/pizza-map.html"));
        assert!(uris.contains(&"ui://widget/retirement-income-estimator.html"));
    }

    #[test]
    fn test_listing_metadata() {
        let resources = service().list_resources();
        let map = resources
            .iter()
            .find(|r| r.raw.uri == "ui://widget/pizza-map.html")
            .unwrap();

        assert_eq!(map.raw.name, "Show Pizza Map");
        assert_eq!(
            map.raw.description.as_deref(),
            Some("Show Pizza Map widget markup")
        );
        assert_eq!(map.raw.mime_type.as_deref(), Some(MIME_TYPE));
    }

    #[test]
    fn test_templates_match_resource_set() {
        let service = service();
        let templates = service.list_resource_templates();
        assert_eq!(templates.len(), 5);

        let template_uris: Vec<_> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        for resource in service.list_resources() {
            assert!(template_uris.contains(&resource.raw.uri.as_str()));
        }
    }

    #[test]
    fn test_read_returns_exact_html() {
        let result = service().read("ui://widget/pizza-list.html").unwrap();
        assert_eq!(result.contents.len(), 1);

        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                ..
            } => {
                assert_eq!(uri, "ui://widget/pizza-list.html");
                assert_eq!(mime_type.as_deref(), Some(MIME_TYPE));
                assert_eq!(text, "<div id=\"pizzaz-list-root\"></div>");
            }
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[test]
    fn test_read_unknown_uri() {
        let err = service().read("ui://widget/nope.html").unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
        assert_eq!(err.to_string(), "Unknown resource: ui://widget/nope.html");
    }
}
