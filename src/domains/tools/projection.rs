//! Retirement projection engine.
//!
//! A pure year-by-year balance simulation. Each simulated year adds the
//! employee contribution and any employer match to the carried balance, then
//! applies the assumed return to that whole amount - contribute first, grow
//! the whole. The ordering is part of the observed contract; do not reorder
//! it toward another financial convention.
//!
//! Monetary point fields are rounded to whole units for display. The running
//! balance and the cumulative totals are carried at full precision and only
//! rounded once at the end, so display rounding never compounds.

use serde::Serialize;

use super::definitions::RetirementParams;

/// One simulated year of the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// 1-based year index.
    pub year: u32,

    /// Age reached at the end of this year.
    pub age: u32,

    pub start_balance: i64,
    pub employee_contribution: i64,
    pub employer_match: i64,
    pub growth: i64,
    pub end_balance: i64,
}

/// Totals over the whole projection horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    /// Number of years simulated.
    pub years: u32,

    pub ending_balance: i64,
    pub total_employee_contrib: i64,
    pub total_employer_match: i64,
}

/// A complete projection: summary plus per-year points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetirementProjection {
    pub summary: ProjectionSummary,
    pub points: Vec<ProjectionPoint>,
}

/// Project a savings balance from the current age to the retirement age.
///
/// A retirement age at or before the current age clamps the horizon to zero:
/// no points, and the ending balance is just the rounded current savings.
pub fn project(input: &RetirementParams) -> RetirementProjection {
    let current_savings = input.current_savings.max(0.0);
    let contribution_pct = input.annual_contribution_pct.max(0.0);
    let match_up_to_pct = input.match_up_to_pct.max(0.0);
    let match_rate_pct = input.match_rate_pct.max(0.0);
    let annual_return = input.assumed_annual_return_pct.max(0.0);

    let years = input.retirement_age.saturating_sub(input.age);

    let mut balance = current_savings;
    let mut total_employee_contrib = 0.0;
    let mut total_employer_match = 0.0;
    let mut points = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let employee_contribution = (input.annual_salary * contribution_pct).max(0.0);

        // The match only applies up to the capped share of salary.
        let capped_pct = contribution_pct.min(match_up_to_pct);
        let employer_base = (input.annual_salary * capped_pct).max(0.0);
        let employer_match = if input.employer_match {
            employer_base * match_rate_pct
        } else {
            0.0
        };

        let growth = ((balance + employee_contribution + employer_match) * annual_return).max(0.0);
        let end_balance = balance + employee_contribution + employer_match + growth;

        points.push(ProjectionPoint {
            year,
            age: input.age + year,
            start_balance: round_unit(balance),
            employee_contribution: round_unit(employee_contribution),
            employer_match: round_unit(employer_match),
            growth: round_unit(growth),
            end_balance: round_unit(end_balance),
        });

        total_employee_contrib += employee_contribution;
        total_employer_match += employer_match;
        balance = end_balance;
    }

    RetirementProjection {
        summary: ProjectionSummary {
            years,
            ending_balance: round_unit(balance),
            total_employee_contrib: round_unit(total_employee_contrib),
            total_employer_match: round_unit(total_employer_match),
        },
        points,
    }
}

/// Round a monetary amount to the nearest whole unit for display.
fn round_unit(amount: f64) -> i64 {
    amount.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RetirementParams {
        RetirementParams {
            age: 30,
            retirement_age: 32,
            annual_salary: 100_000.0,
            current_savings: 10_000.0,
            annual_contribution_pct: 0.1,
            employer_match: true,
            match_up_to_pct: 0.05,
            match_rate_pct: 0.5,
            assumed_annual_return_pct: 0.07,
        }
    }

    #[test]
    fn test_two_year_projection() {
        let projection = project(&params());

        assert_eq!(projection.summary.years, 2);
        assert_eq!(projection.points.len(), 2);

        // Year 1: contribute 10% of 100k, match 50% of the capped 5%, grow
        // 7% of the post-contribution balance.
        let first = &projection.points[0];
        assert_eq!(first.year, 1);
        assert_eq!(first.age, 31);
        assert_eq!(first.start_balance, 10_000);
        assert_eq!(first.employee_contribution, 10_000);
        assert_eq!(first.employer_match, 2_500);
        assert_eq!(first.growth, 1_575);
        assert_eq!(first.end_balance, 24_075);

        let second = &projection.points[1];
        assert_eq!(second.year, 2);
        assert_eq!(second.age, 32);
        assert_eq!(second.start_balance, 24_075);
        assert_eq!(second.growth, 2_560);
        assert_eq!(second.end_balance, 39_135);

        assert_eq!(projection.summary.ending_balance, 39_135);
        assert_eq!(projection.summary.total_employee_contrib, 20_000);
        assert_eq!(projection.summary.total_employer_match, 5_000);
    }

    #[test]
    fn test_retirement_before_current_age_clamps_to_zero() {
        let mut input = params();
        input.age = 60;
        input.retirement_age = 40;

        let projection = project(&input);
        assert_eq!(projection.summary.years, 0);
        assert!(projection.points.is_empty());
        assert_eq!(projection.summary.ending_balance, 10_000);
        assert_eq!(projection.summary.total_employee_contrib, 0);
        assert_eq!(projection.summary.total_employer_match, 0);
    }

    #[test]
    fn test_years_and_ages_strictly_increase() {
        let mut input = params();
        input.retirement_age = 65;

        let projection = project(&input);
        assert_eq!(projection.points.len(), 35);
        for (i, point) in projection.points.iter().enumerate() {
            assert_eq!(point.year, i as u32 + 1);
            assert_eq!(point.age, input.age + point.year);
        }
    }

    #[test]
    fn test_end_balance_monotonically_increases() {
        let mut input = params();
        input.retirement_age = 50;

        let projection = project(&input);
        for pair in projection.points.windows(2) {
            assert!(pair[1].end_balance > pair[0].end_balance);
        }
    }

    #[test]
    fn test_no_employer_match() {
        let mut input = params();
        input.employer_match = false;

        let projection = project(&input);
        assert_eq!(projection.points[0].employer_match, 0);
        assert_eq!(projection.summary.total_employer_match, 0);
        // 10_000 + 10_000 contribution, grown 7%.
        assert_eq!(projection.points[0].end_balance, 21_400);
    }

    #[test]
    fn test_contribution_below_match_cap_is_not_topped_up() {
        let mut input = params();
        input.annual_contribution_pct = 0.03;

        let projection = project(&input);
        // Match base is min(3%, 5%) of salary = 3000, matched at 50%.
        assert_eq!(projection.points[0].employer_match, 1_500);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let input = params();
        assert_eq!(project(&input), project(&input));
    }

    #[test]
    fn test_wire_field_names() {
        let projection = project(&params());
        let value = serde_json::to_value(&projection).unwrap();

        let point = &value["points"][0];
        for key in [
            "year",
            "age",
            "startBalance",
            "employeeContribution",
            "employerMatch",
            "growth",
            "endBalance",
        ] {
            assert!(point.get(key).is_some(), "missing point key {key}");
        }
        for key in [
            "years",
            "endingBalance",
            "totalEmployeeContrib",
            "totalEmployerMatch",
        ] {
            assert!(value["summary"].get(key).is_some(), "missing summary key {key}");
        }
    }
}
