use crate::models::Category;

/// A user-added entry: a free-form name and a raw calorie value.
///
/// The calorie value stays exactly as typed; nothing sanitizes or validates
/// it until a calculation pass reads it. The name is informational only and
/// never enters any computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub calories: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }

    /// Unique field id for an entry's calorie field, e.g. "lunch-3-calories".
    pub fn calorie_field_id(category: Category, index: usize) -> String {
        format!("{}-{}-calories", category.id(), index)
    }

    /// Unique field id for an entry's name field, e.g. "lunch-3-name".
    pub fn name_field_id(category: Category, index: usize) -> String {
        format!("{}-{}-name", category.id(), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids() {
        assert_eq!(
            Entry::calorie_field_id(Category::Lunch, 3),
            "lunch-3-calories"
        );
        assert_eq!(Entry::name_field_id(Category::Snacks, 1), "snacks-1-name");
    }

    #[test]
    fn test_raw_value_kept_verbatim() {
        let entry = Entry::new("Oatmeal", " +150 ");
        assert_eq!(entry.calories, " +150 ");
    }
}
