//! Pizza widget tool definition.
//!
//! Every widget in the catalog is exposed as its own tool under the widget's
//! identifier. All of them share one schema and one behavior: echo the
//! requested topping as structured content and hand the host the widget
//! markup to render.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::domains::widgets::WidgetDescriptor;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters shared by all widget echo tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PizzaToolParams {
    /// Topping to mention when rendering the widget.
    pub pizza_topping: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Widget echo tool - renders a catalog widget with the chosen topping.
pub struct PizzaWidgetTool;

impl PizzaWidgetTool {
    /// Execute the echo for a resolved widget.
    pub fn execute(widget: &WidgetDescriptor, params: &PizzaToolParams) -> CallToolResult {
        info!(
            "Rendering widget '{}' with topping '{}'",
            widget.identifier, params.pizza_topping
        );

        CallToolResult {
            content: vec![Content::text(widget.response_text.clone())],
            structured_content: Some(json!({ "pizzaTopping": params.pizza_topping })),
            is_error: Some(false),
            meta: Some(widget.call_meta()),
        }
    }

    /// Create the Tool model advertised for a widget.
    pub fn to_tool(widget: &WidgetDescriptor) -> Tool {
        Tool {
            name: widget.identifier.clone().into(),
            description: Some(widget.title.clone().into()),
            input_schema: cached_schema_for_type::<PizzaToolParams>(),
            annotations: Some(Self::annotations()),
            output_schema: None,
            icons: None,
            meta: Some(widget.tool_meta()),
            title: Some(widget.title.clone()),
        }
    }

    /// Hints that keep the host from asking for approval on every call.
    fn annotations() -> ToolAnnotations {
        ToolAnnotations {
            title: None,
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: None,
            open_world_hint: Some(false),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> WidgetDescriptor {
        WidgetDescriptor {
            identifier: "pizza-map".to_string(),
            title: "Show Pizza Map".to_string(),
            template_uri: "ui://widget/pizza-map.html".to_string(),
            invoking: "Hand-tossing a map".to_string(),
            invoked: "Served a fresh map".to_string(),
            html: "<div>map</div>".to_string(),
            response_text: "Rendered a pizza map!".to_string(),
        }
    }

    #[test]
    fn test_execute_echoes_topping() {
        let params = PizzaToolParams {
            pizza_topping: "pepperoni".to_string(),
        };
        let result = PizzaWidgetTool::execute(&widget(), &params);

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(json!({ "pizzaTopping": "pepperoni" }))
        );

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "Rendered a pizza map!");
    }

    #[test]
    fn test_execute_attaches_widget_meta() {
        let params = PizzaToolParams {
            pizza_topping: "mushroom".to_string(),
        };
        let result = PizzaWidgetTool::execute(&widget(), &params);

        let meta = result.meta.unwrap();
        assert_eq!(
            meta.0.get("openai/outputTemplate").unwrap(),
            "ui://widget/pizza-map.html"
        );
        assert_eq!(
            meta.0.get("openai.com/widget").unwrap()["resource"]["text"],
            "<div>map</div>"
        );
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = PizzaWidgetTool::to_tool(&widget());

        assert_eq!(tool.name.as_ref(), "pizza-map");
        assert_eq!(tool.title.as_deref(), Some("Show Pizza Map"));

        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.destructive_hint, Some(false));
        assert_eq!(annotations.open_world_hint, Some(false));
    }

    #[test]
    fn test_schema_requires_topping() {
        let tool = PizzaWidgetTool::to_tool(&widget());
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();

        assert_eq!(schema["required"], json!(["pizzaTopping"]));
        assert_eq!(schema["additionalProperties"], json!(false));
    }
}
