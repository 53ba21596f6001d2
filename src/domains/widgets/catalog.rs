//! Widget descriptors and the indexed catalog.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{Meta, ResourceContents};
use serde_json::{Value, json};

/// MIME type the host expects for widget markup.
pub const MIME_TYPE: &str = "text/html+skybridge";

/// An immutable description of one widget, created once at startup.
#[derive(Debug, Clone)]
pub struct WidgetDescriptor {
    /// Unique key used as the tool name.
    pub identifier: String,

    /// Human-readable title, also used as the tool description.
    pub title: String,

    /// Unique resource URI of the widget markup (`ui://widget/<name>.html`).
    pub template_uri: String,

    /// Status phrase shown while the tool runs.
    pub invoking: String,

    /// Status phrase shown once the tool has finished.
    pub invoked: String,

    /// The widget HTML body.
    pub html: String,

    /// Free-text response returned when the widget tool succeeds.
    pub response_text: String,
}

impl WidgetDescriptor {
    /// Description used when listing the widget as a resource.
    pub fn resource_description(&self) -> String {
        format!("{} widget markup", self.title)
    }

    /// Metadata convention attached to listed tools and resources.
    ///
    /// The exact key set is part of the host contract and must not change.
    pub fn tool_meta(&self) -> Meta {
        let mut map = serde_json::Map::new();
        map.insert("openai/outputTemplate".to_string(), json!(self.template_uri));
        map.insert(
            "openai/toolInvocation/invoking".to_string(),
            json!(self.invoking),
        );
        map.insert(
            "openai/toolInvocation/invoked".to_string(),
            json!(self.invoked),
        );
        map.insert("openai/widgetAccessible".to_string(), json!(true));
        map.insert("openai/resultCanProduceWidget".to_string(), json!(true));
        Meta(map)
    }

    /// Metadata attached to successful tool call results.
    ///
    /// Same convention as [`tool_meta`](Self::tool_meta) plus the embedded
    /// widget resource, so the host can render without a second fetch.
    pub fn call_meta(&self) -> Meta {
        let mut meta = self.tool_meta();
        meta.0
            .insert("openai.com/widget".to_string(), self.embedded_widget());
        meta
    }

    /// The widget HTML wrapped as an embedded resource content block.
    fn embedded_widget(&self) -> Value {
        json!({
            "type": "resource",
            "resource": {
                "uri": self.template_uri,
                "mimeType": MIME_TYPE,
                "text": self.html,
                "title": self.title,
            }
        })
    }

    /// The widget HTML as protocol resource contents, for `resources/read`.
    pub fn resource_contents(&self) -> ResourceContents {
        ResourceContents::TextResourceContents {
            uri: self.template_uri.clone(),
            mime_type: Some(MIME_TYPE.to_string()),
            text: self.html.clone(),
            meta: Some(self.tool_meta()),
        }
    }
}

/// The static widget registry with lookup indexes by identifier and by
/// template URI.
///
/// Both lookups are total: an absent key yields `None`, never a fault.
/// Identifiers and template URIs are unique within the catalog, so the two
/// indexes cover the same descriptor set without collisions.
pub struct WidgetCatalog {
    /// Descriptors in registration order, for stable listings.
    widgets: Vec<Arc<WidgetDescriptor>>,
    by_id: HashMap<String, Arc<WidgetDescriptor>>,
    by_uri: HashMap<String, Arc<WidgetDescriptor>>,
}

impl WidgetCatalog {
    /// Build a catalog from a list of descriptors.
    pub fn new(widgets: Vec<WidgetDescriptor>) -> Self {
        let widgets: Vec<Arc<WidgetDescriptor>> = widgets.into_iter().map(Arc::new).collect();

        let by_id = widgets
            .iter()
            .map(|w| (w.identifier.clone(), w.clone()))
            .collect();
        let by_uri = widgets
            .iter()
            .map(|w| (w.template_uri.clone(), w.clone()))
            .collect();

        Self {
            widgets,
            by_id,
            by_uri,
        }
    }

    /// Look up a widget by its identifier.
    pub fn resolve_by_id(&self, id: &str) -> Option<&WidgetDescriptor> {
        self.by_id.get(id).map(|w| w.as_ref())
    }

    /// Look up a widget by its template URI.
    pub fn resolve_by_uri(&self, uri: &str) -> Option<&WidgetDescriptor> {
        self.by_uri.get(uri).map(|w| w.as_ref())
    }

    /// Iterate widgets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.widgets.iter().map(|w| w.as_ref())
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
