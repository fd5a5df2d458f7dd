use serde::Serialize;

/// Whether the day ended over or under budget.
///
/// The polarity follows the original counter: a non-negative remaining
/// budget reads "Deficit", a negative one "Surplus". Counter to everyday
/// budgeting language, but kept deliberately; tests pin it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Surplus,
    Deficit,
}

impl Balance {
    pub fn label(&self) -> &'static str {
        match self {
            Balance::Surplus => "Surplus",
            Balance::Deficit => "Deficit",
        }
    }
}

/// Result of one successful calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieReport {
    /// Budgeted calories for the day.
    pub budget: f64,

    /// Calories consumed across all meal categories.
    pub consumed: f64,

    /// Calories burned through exercise.
    pub burned: f64,

    /// budget - consumed + burned.
    pub remaining: f64,
}

impl CalorieReport {
    pub fn new(budget: f64, consumed: f64, burned: f64) -> Self {
        Self {
            budget,
            consumed,
            burned,
            remaining: budget - consumed + burned,
        }
    }

    pub fn balance(&self) -> Balance {
        if self.remaining < 0.0 {
            Balance::Surplus
        } else {
            Balance::Deficit
        }
    }

    /// Magnitude shown in the headline, always non-negative.
    pub fn magnitude(&self) -> f64 {
        self.remaining.abs()
    }
}
