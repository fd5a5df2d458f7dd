use crate::error::{CounterError, Result};
use crate::models::{CalorieReport, Category};
use crate::state::CounterState;
use crate::tally::input::{sanitize, scientific_fragment};

/// Sum a sequence of raw calorie field values.
///
/// Each value is sanitized, then checked for scientific notation. The first
/// rejected field aborts the scan with `InvalidCalorieValue` carrying the
/// matched fragment; the partial sum is discarded. Empty and non-numeric
/// values coerce to 0 silently.
pub fn sum_fields<'a, I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total = 0.0;

    for raw in values {
        let cleaned = sanitize(raw);
        if let Some(fragment) = scientific_fragment(&cleaned) {
            return Err(CounterError::InvalidCalorieValue(fragment));
        }
        total += cleaned.parse::<f64>().unwrap_or(0.0);
    }

    Ok(total)
}

/// Run one full calculation pass over the current field values.
///
/// Categories are scanned in encounter order, then the single-element
/// budget field. Every category that hits an invalid field contributes its
/// first matched fragment; categories already summed are not re-validated.
/// Any rejection fails the whole pass with `InvalidCalorieValues` and no
/// report is produced, so callers must leave any displayed result as-is.
pub fn calculate_report(state: &CounterState) -> Result<CalorieReport> {
    let mut rejected = Vec::new();
    let mut consumed = 0.0;
    let mut burned = 0.0;

    for category in Category::ALL {
        match sum_fields(state.calorie_values(category)) {
            Ok(total) if category.is_meal() => consumed += total,
            Ok(total) => burned += total,
            Err(CounterError::InvalidCalorieValue(fragment)) => rejected.push(fragment),
            Err(e) => return Err(e),
        }
    }

    let budget = match sum_fields([state.budget_raw()]) {
        Ok(total) => total,
        Err(CounterError::InvalidCalorieValue(fragment)) => {
            rejected.push(fragment);
            0.0
        }
        Err(e) => return Err(e),
    };

    if !rejected.is_empty() {
        return Err(CounterError::InvalidCalorieValues(rejected));
    }

    Ok(CalorieReport::new(budget, consumed, burned))
}
