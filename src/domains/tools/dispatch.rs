//! Tool Dispatch Core - routes tool calls to their handlers.
//!
//! Dispatch is by name: the reserved estimator name goes to the projection
//! engine, every other name is looked up in the widget catalog and echoed.
//! All failures (validation, unknown tool) come back as ordinary results
//! with `isError` set; the process never faults on a bad call.
//!
//! The dispatcher holds no mutable state - it is a pure function of the
//! call name, the arguments, and the immutable catalog, so any number of
//! calls can run concurrently.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use tracing::{instrument, warn};

use super::definitions::{EstimateRetirementTool, PizzaWidgetTool};
use super::validation::{self, Arguments, format_violations};
use crate::domains::widgets::{RETIREMENT_WIDGET_ID, WidgetCatalog};

/// Routes tool calls against the widget catalog.
#[derive(Clone)]
pub struct ToolDispatcher {
    catalog: Arc<WidgetCatalog>,
}

impl ToolDispatcher {
    /// Create a dispatcher over a built catalog.
    pub fn new(catalog: Arc<WidgetCatalog>) -> Self {
        Self { catalog }
    }

    /// The tools advertised to clients: one echo tool per catalog widget.
    ///
    /// The estimator is reachable by name but intentionally not listed; the
    /// retirement widget drives it directly.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.catalog.iter().map(PizzaWidgetTool::to_tool).collect()
    }

    /// Handle one tool call and produce the response envelope.
    #[instrument(skip(self, arguments), fields(tool = %name))]
    pub fn dispatch(&self, name: &str, arguments: Arguments) -> CallToolResult {
        if name == EstimateRetirementTool::NAME {
            return self.dispatch_estimator(&arguments);
        }

        let Some(widget) = self.catalog.resolve_by_id(name) else {
            warn!("Unknown tool requested: {}", name);
            return CallToolResult::error(vec![Content::text(format!("Unknown tool: {name}"))]);
        };

        match validation::validate_pizza(&arguments) {
            Ok(params) => PizzaWidgetTool::execute(widget, &params),
            Err(violations) => validation_error(&format_violations(&violations)),
        }
    }

    fn dispatch_estimator(&self, arguments: &Arguments) -> CallToolResult {
        let params = match validation::validate_retirement(arguments) {
            Ok(params) => params,
            Err(violations) => return validation_error(&format_violations(&violations)),
        };

        // The catalog is fixed, so the estimator widget is always present;
        // resolving keeps the lookup total all the same.
        let Some(widget) = self.catalog.resolve_by_id(RETIREMENT_WIDGET_ID) else {
            warn!("Retirement widget missing from catalog");
            return CallToolResult::error(vec![Content::text(format!(
                "Unknown tool: {}",
                EstimateRetirementTool::NAME
            ))]);
        };

        EstimateRetirementTool::execute(widget, &params)
    }
}

/// Error envelope for rejected arguments: text only, no structured content.
fn validation_error(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}
