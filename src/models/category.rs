use std::fmt;

/// One of the five fixed groupings an entry can belong to.
///
/// The first four are meals and count toward consumed calories; Exercise
/// counts toward burned calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Exercise,
}

impl Category {
    /// All categories in encounter order. Calculation passes validate
    /// fields in this order, so alert order is deterministic.
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snacks,
        Category::Exercise,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Snacks => "Snacks",
            Category::Exercise => "Exercise",
        }
    }

    /// Lowercase identifier used for field ids (e.g. "lunch-3-calories").
    pub fn id(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Snacks => "snacks",
            Category::Exercise => "exercise",
        }
    }

    /// Whether this category counts toward consumed calories.
    pub fn is_meal(&self) -> bool {
        !matches!(self, Category::Exercise)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
