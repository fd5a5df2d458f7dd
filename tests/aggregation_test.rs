use assert_float_eq::assert_float_absolute_eq;

use calorie_counter_rs::error::CounterError;
use calorie_counter_rs::models::{Balance, Category, Entry};
use calorie_counter_rs::state::CounterState;
use calorie_counter_rs::tally::{calculate_report, sanitize, scientific_fragment, sum_fields};

fn state_with(budget: &str, fields: &[(Category, &str)]) -> CounterState {
    let mut state = CounterState::new();
    state.set_budget(budget.to_string());
    for (category, calories) in fields {
        state.add_entry(*category, Entry::new("", *calories));
    }
    state
}

#[test]
fn test_sanitize_then_validate_pipeline() {
    // Signs and whitespace vanish before validation looks at the value
    let cleaned = sanitize("+12 -3");
    assert_eq!(cleaned, "123");
    assert_eq!(scientific_fragment(&cleaned), None);

    // A sign inside an exponent does not hide the notation
    let cleaned = sanitize("5e+2");
    assert_eq!(scientific_fragment(&cleaned), Some("5e2".to_string()));
}

#[test]
fn test_deficit_scenario() {
    let state = state_with(
        "2000",
        &[
            (Category::Breakfast, "500"),
            (Category::Lunch, "700"),
            (Category::Dinner, "600"),
            (Category::Snacks, "0"),
            (Category::Exercise, "200"),
        ],
    );

    let report = calculate_report(&state).unwrap();
    assert_float_absolute_eq!(report.consumed, 1800.0);
    assert_float_absolute_eq!(report.remaining, 400.0);
    assert_eq!(report.balance(), Balance::Deficit);
    assert_float_absolute_eq!(report.magnitude(), 400.0);
}

#[test]
fn test_surplus_scenario() {
    let state = state_with(
        "1500",
        &[(Category::Breakfast, "800"), (Category::Lunch, "900")],
    );

    let report = calculate_report(&state).unwrap();
    assert_float_absolute_eq!(report.consumed, 1700.0);
    assert_float_absolute_eq!(report.remaining, -200.0);
    assert_eq!(report.balance(), Balance::Surplus);
    assert_float_absolute_eq!(report.magnitude(), 200.0);
}

#[test]
fn test_invalid_field_produces_exact_alert_text() {
    let state = state_with("2000", &[(Category::Dinner, "5e2")]);

    let err = calculate_report(&state).unwrap_err();
    let CounterError::InvalidCalorieValues(fragments) = err else {
        panic!("expected a rejected pass");
    };

    assert_eq!(fragments.len(), 1);
    let alert = CounterError::InvalidCalorieValue(fragments[0].clone());
    assert_eq!(alert.to_string(), "Invalid Input: 5e2");
}

#[test]
fn test_invalid_pass_produces_no_report() {
    let state = state_with(
        "2000",
        &[(Category::Breakfast, "500"), (Category::Snacks, "1e3")],
    );

    // No report means nothing for the caller to render; whatever was on
    // screen before stays there
    assert!(calculate_report(&state).is_err());
}

#[test]
fn test_fractional_values_sum_exactly() {
    let total = sum_fields(["100.5", "0.25"]).unwrap();
    assert_float_absolute_eq!(total, 100.75);
}

#[test]
fn test_fields_read_at_submit_time() {
    // Totals are derived, never cached: edits between passes show up
    let mut state = state_with("1000", &[(Category::Lunch, "400")]);
    let first = calculate_report(&state).unwrap();
    assert_float_absolute_eq!(first.consumed, 400.0);

    state.add_entry(Category::Lunch, Entry::new("", "100"));
    let second = calculate_report(&state).unwrap();
    assert_float_absolute_eq!(second.consumed, 500.0);
}
