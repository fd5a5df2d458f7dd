use crate::error::Result;
use crate::models::{CalorieReport, Category, Entry};
use crate::state::CounterState;

/// Format a calorie amount: whole numbers without a decimal point,
/// fractional values as-is.
pub fn fmt_calories(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Display a calorie report: headline with magnitude, then budgeted,
/// consumed, and burned totals, in that order.
pub fn display_report(report: &CalorieReport) {
    println!();
    println!(
        "{} Calorie {}",
        fmt_calories(report.magnitude()),
        report.balance().label()
    );
    println!("----------------------------");
    println!("{} Calories Budgeted", fmt_calories(report.budget));
    println!("{} Calories Consumed", fmt_calories(report.consumed));
    println!("{} Calories Burned", fmt_calories(report.burned));
}

/// Render a report as pretty-printed JSON, with the derived balance label
/// and magnitude alongside the raw totals.
pub fn render_report_json(report: &CalorieReport) -> Result<String> {
    let mut value = serde_json::to_value(report)?;
    value["balance"] = serde_json::Value::from(report.balance().label());
    value["magnitude"] = serde_json::Value::from(report.magnitude());
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render the alert channel: one line per rejected fragment, in encounter
/// order. Nothing else is printed; any previously displayed report stays.
pub fn display_invalid(fragments: &[String]) {
    for fragment in fragments {
        eprintln!("Invalid Input: {}", fragment);
    }
}

/// Display the current form contents, category by category.
pub fn display_entries(state: &CounterState) {
    if state.is_empty() {
        println!("(form is empty)");
        return;
    }

    println!();
    for category in Category::ALL {
        let entries = state.entries(category);
        if entries.is_empty() {
            continue;
        }

        println!("=== {} ({} entries) ===", category.label(), entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let index = i + 1;
            let name = if entry.name.is_empty() {
                "(unnamed)"
            } else {
                entry.name.as_str()
            };
            let calories = if entry.calories.is_empty() {
                "(empty)"
            } else {
                entry.calories.as_str()
            };
            println!("  {}: {}", Entry::name_field_id(category, index), name);
            println!("  {}: {}", Entry::calorie_field_id(category, index), calories);
        }
        println!();
    }

    if state.budget_raw().is_empty() {
        println!("Budget: (not set)");
    } else {
        println!("Budget: {}", state.budget_raw());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_calories_whole() {
        assert_eq!(fmt_calories(400.0), "400");
        assert_eq!(fmt_calories(0.0), "0");
        assert_eq!(fmt_calories(2000.0), "2000");
    }

    #[test]
    fn test_fmt_calories_fractional() {
        assert_eq!(fmt_calories(500.5), "500.5");
    }

    #[test]
    fn test_render_report_json_fields() {
        let report = CalorieReport::new(1500.0, 1700.0, 0.0);
        let json = render_report_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["balance"], "Surplus");
        assert_eq!(value["magnitude"], 200.0);
        assert_eq!(value["budget"], 1500.0);
        assert_eq!(value["consumed"], 1700.0);
        assert_eq!(value["burned"], 0.0);
        assert_eq!(value["remaining"], -200.0);
    }
}
