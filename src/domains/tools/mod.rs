//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `dispatch.rs` - Name-based routing of calls to tool handlers
//! - `validation.rs` - Strict argument validation with full diagnostics
//! - `projection.rs` - Pure retirement projection engine

pub mod definitions;
mod dispatch;
pub mod projection;
pub mod validation;

pub use definitions::{EstimateRetirementTool, PizzaToolParams, PizzaWidgetTool, RetirementParams};
pub use dispatch::ToolDispatcher;
pub use projection::{ProjectionPoint, ProjectionSummary, RetirementProjection, project};
