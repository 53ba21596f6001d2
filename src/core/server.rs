//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool dispatcher and the resource service.
//!
//! The widget catalog is built once here, before any request is served, and
//! shared read-only behind `Arc` - every handler is then a pure function of
//! its request, so concurrent calls need no synchronization.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::assets::AssetStore;
use super::config::Config;
use crate::domains::resources::{ResourceError, ResourceService};
use crate::domains::tools::ToolDispatcher;
use crate::domains::widgets::{WidgetCatalog, build_catalog};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// the tool dispatcher and the resource service.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Routes tool calls by name.
    dispatcher: ToolDispatcher,

    /// Resolves widget resources by URI.
    resource_service: Arc<ResourceService>,
}

impl McpServer {
    /// Create a new MCP server, loading widget assets from the configured
    /// directory.
    ///
    /// Fails if any widget HTML asset is missing - the server must not start
    /// serving with a partial catalog.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let assets = AssetStore::new(&config.assets.dir);
        let catalog = build_catalog(&assets)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create a server over an already-built widget catalog.
    pub fn with_catalog(config: Config, catalog: WidgetCatalog) -> Self {
        let config = Arc::new(config);
        let catalog = Arc::new(catalog);

        info!("Widget catalog ready: {} widgets", catalog.len());

        Self {
            dispatcher: ToolDispatcher::new(catalog.clone()),
            resource_service: Arc::new(ResourceService::new(catalog)),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as wire JSON (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn list_tools_json(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .list_tools()
            .iter()
            .map(|tool| serde_json::to_value(tool).unwrap_or_default())
            .collect()
    }

    /// Call a tool by name and return the envelope as wire JSON.
    ///
    /// Validation failures and unknown tools come back as envelopes with
    /// `isError` set, never as transport errors.
    #[cfg(feature = "http")]
    pub fn call_tool_json(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> serde_json::Value {
        let result = self.dispatcher.dispatch(name, arguments);
        serde_json::to_value(&result).unwrap_or_default()
    }

    /// List all widget resources as wire JSON (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn list_resources_json(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .iter()
            .map(|resource| serde_json::to_value(resource).unwrap_or_default())
            .collect()
    }

    /// List all resource templates as wire JSON (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn list_resource_templates_json(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resource_templates()
            .iter()
            .map(|template| serde_json::to_value(template).unwrap_or_default())
            .collect()
    }

    /// Read a resource by URI as wire JSON (for HTTP transport).
    ///
    /// An unknown URI yields a valid empty read result annotated with an
    /// error note, mirroring how the protocol treats "no contents".
    #[cfg(feature = "http")]
    pub fn read_resource_json(&self, uri: &str) -> serde_json::Value {
        match self.resource_service.read(uri) {
            Ok(result) => serde_json::to_value(&result).unwrap_or_default(),
            Err(e) => {
                warn!("{}", e);
                serde_json::json!({
                    "contents": [],
                    "_meta": { "error": e.to_string() }
                })
            }
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Pizzaz demo server. Each tool renders a widget; the retirement \
                 estimator also returns a year-by-year savings projection."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.dispatcher.dispatch(&request.name, arguments))
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resource_service.list_resource_templates(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        match self.resource_service.read(&request.uri) {
            Ok(result) => Ok(result),
            // An unknown URI is a valid empty read, not a protocol fault.
            Err(e @ ResourceError::NotFound(_)) => {
                warn!("{}", e);
                Ok(ReadResourceResult { contents: vec![] })
            }
            Err(e) => Err(McpError::internal_error(e.to_string(), None)),
        }
    }
}
