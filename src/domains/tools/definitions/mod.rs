//! Tool definitions module.
//!
//! Two logical tools exist: the per-widget echo tools (one listed tool per
//! catalog entry, all sharing the pizza schema) and the retirement estimator.

pub mod estimate_retirement;
pub mod pizza;

pub use estimate_retirement::{EstimateRetirementTool, RetirementParams};
pub use pizza::{PizzaToolParams, PizzaWidgetTool};
