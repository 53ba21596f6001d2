//! Retirement estimator tool definition.
//!
//! Computes a year-by-year savings trajectory and responds with the
//! retirement widget so the host can chart it. Percent inputs are fractions
//! (0.06 means 6%), matching the widget's own field names.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domains::tools::projection::project;
use crate::domains::widgets::WidgetDescriptor;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the retirement estimator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RetirementParams {
    /// Current age.
    #[schemars(range(min = 0, max = 110))]
    pub age: u32,

    /// Target retirement age.
    #[schemars(range(min = 0, max = 110))]
    pub retirement_age: u32,

    /// Annual salary amount.
    #[schemars(range(min = 0.0))]
    pub annual_salary: f64,

    /// Current retirement savings.
    #[schemars(range(min = 0.0))]
    pub current_savings: f64,

    /// Annual contribution as a fraction of salary (0-1).
    #[schemars(range(min = 0.0, max = 1.0))]
    pub annual_contribution_pct: f64,

    /// Whether the employer matches contributions.
    pub employer_match: bool,

    /// Maximum salary fraction eligible for employer match (0-1).
    #[schemars(range(min = 0.0, max = 1.0))]
    pub match_up_to_pct: f64,

    /// Employer match rate as a fraction (0-1).
    #[schemars(range(min = 0.0, max = 1.0))]
    pub match_rate_pct: f64,

    /// Assumed annual return as a fraction (0-1).
    #[schemars(range(min = 0.0, max = 1.0))]
    pub assumed_annual_return_pct: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Retirement estimator tool - projects a savings balance to retirement.
pub struct EstimateRetirementTool;

impl EstimateRetirementTool {
    /// Tool name as dispatched in MCP.
    pub const NAME: &'static str = "estimate_retirement";

    /// Run the projection and wrap it with the retirement widget.
    pub fn execute(widget: &WidgetDescriptor, params: &RetirementParams) -> CallToolResult {
        info!(
            "Estimating retirement: age {} to {}",
            params.age, params.retirement_age
        );

        let projection = project(params);

        match serde_json::to_value(&projection) {
            Ok(structured) => CallToolResult {
                content: vec![Content::text(widget.response_text.clone())],
                structured_content: Some(structured),
                is_error: Some(false),
                meta: Some(widget.call_meta()),
            },
            Err(e) => {
                warn!("Failed to serialize projection: {}", e);
                CallToolResult::error(vec![Content::text(format!(
                    "Failed to serialize projection: {e}"
                ))])
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
