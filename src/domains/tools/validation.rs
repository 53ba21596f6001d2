//! Strict argument validation for tool calls.
//!
//! Validation runs over the raw JSON argument object before anything is
//! computed, and reports every violation it finds in one pass (unknown
//! fields, missing required fields, type mismatches, range violations), so a
//! caller gets complete diagnostics in a single round trip. Only when the
//! checks pass is the typed params value deserialized.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::definitions::{PizzaToolParams, RetirementParams};

/// Raw tool-call arguments as delivered by the transport.
pub type Arguments = Map<String, Value>;

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the offending field, as spelled on the wire.
    pub field: String,

    /// What was wrong with it.
    pub message: String,
}

impl Violation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Render a violation list as the error text returned to the caller.
pub fn format_violations(violations: &[Violation]) -> String {
    let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
    format!("Input validation error: {}", details.join("; "))
}

const PIZZA_FIELDS: &[&str] = &["pizzaTopping"];

const RETIREMENT_FIELDS: &[&str] = &[
    "age",
    "retirementAge",
    "annualSalary",
    "currentSavings",
    "annualContributionPct",
    "employerMatch",
    "matchUpToPct",
    "matchRatePct",
    "assumedAnnualReturnPct",
];

/// Validate arguments for the widget echo tools.
pub fn validate_pizza(args: &Arguments) -> Result<PizzaToolParams, Vec<Violation>> {
    let mut violations = Vec::new();

    check_unknown_fields(args, PIZZA_FIELDS, &mut violations);
    check_string(args, "pizzaTopping", &mut violations);

    finish(args, violations)
}

/// Validate arguments for the retirement estimator tool.
pub fn validate_retirement(args: &Arguments) -> Result<RetirementParams, Vec<Violation>> {
    let mut violations = Vec::new();

    check_unknown_fields(args, RETIREMENT_FIELDS, &mut violations);
    check_integer_range(args, "age", 0, 110, &mut violations);
    check_integer_range(args, "retirementAge", 0, 110, &mut violations);
    check_number_non_negative(args, "annualSalary", &mut violations);
    check_number_non_negative(args, "currentSavings", &mut violations);
    check_fraction(args, "annualContributionPct", &mut violations);
    check_bool(args, "employerMatch", &mut violations);
    check_fraction(args, "matchUpToPct", &mut violations);
    check_fraction(args, "matchRatePct", &mut violations);
    check_fraction(args, "assumedAnnualReturnPct", &mut violations);

    finish(args, violations)
}

/// Deserialize the typed params once the field checks found nothing.
fn finish<T: DeserializeOwned>(
    args: &Arguments,
    violations: Vec<Violation>,
) -> Result<T, Vec<Violation>> {
    if !violations.is_empty() {
        return Err(violations);
    }

    // The checks above mirror the schema, so this only fails if they drift.
    serde_json::from_value(Value::Object(args.clone()))
        .map_err(|e| vec![Violation::new("arguments", e.to_string())])
}

fn check_unknown_fields(args: &Arguments, allowed: &[&str], violations: &mut Vec<Violation>) {
    for key in args.keys() {
        if !allowed.contains(&key.as_str()) {
            violations.push(Violation::new(key, "unexpected field"));
        }
    }
}

fn check_string(args: &Arguments, field: &str, violations: &mut Vec<Violation>) {
    match args.get(field) {
        None => violations.push(Violation::new(field, "required field is missing")),
        Some(value) if !value.is_string() => {
            violations.push(Violation::new(field, "must be a string"));
        }
        Some(_) => {}
    }
}

fn check_bool(args: &Arguments, field: &str, violations: &mut Vec<Violation>) {
    match args.get(field) {
        None => violations.push(Violation::new(field, "required field is missing")),
        Some(value) if !value.is_boolean() => {
            violations.push(Violation::new(field, "must be a boolean"));
        }
        Some(_) => {}
    }
}

fn check_integer_range(
    args: &Arguments,
    field: &str,
    min: i64,
    max: i64,
    violations: &mut Vec<Violation>,
) {
    match args.get(field) {
        None => violations.push(Violation::new(field, "required field is missing")),
        Some(value) => match value.as_i64() {
            None => violations.push(Violation::new(field, "must be an integer")),
            Some(n) if n < min || n > max => {
                violations.push(Violation::new(
                    field,
                    format!("must be between {min} and {max}"),
                ));
            }
            Some(_) => {}
        },
    }
}

fn check_number_non_negative(args: &Arguments, field: &str, violations: &mut Vec<Violation>) {
    match number(args, field, violations) {
        Some(n) if n < 0.0 => violations.push(Violation::new(field, "must be at least 0")),
        _ => {}
    }
}

fn check_fraction(args: &Arguments, field: &str, violations: &mut Vec<Violation>) {
    match number(args, field, violations) {
        Some(n) if !(0.0..=1.0).contains(&n) => {
            violations.push(Violation::new(field, "must be between 0 and 1"));
        }
        _ => {}
    }
}

/// Fetch a numeric field, recording missing/type violations.
fn number(args: &Arguments, field: &str, violations: &mut Vec<Violation>) -> Option<f64> {
    match args.get(field) {
        None => {
            violations.push(Violation::new(field, "required field is missing"));
            None
        }
        Some(value) => match value.as_f64() {
            None => {
                violations.push(Violation::new(field, "must be a number"));
                None
            }
            Some(n) => Some(n),
        },
    }
}
