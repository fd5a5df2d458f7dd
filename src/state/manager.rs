use std::collections::HashMap;

use crate::models::{Category, Entry};

/// The in-memory form: per-category entry lists plus the budget field.
///
/// Raw field values are stored untouched; sanitization and validation
/// happen only inside a calculation pass. Totals are never cached here.
#[derive(Debug, Default)]
pub struct CounterState {
    /// Entries keyed by category, in insertion order.
    entries: HashMap<Category, Vec<Entry>>,

    /// Raw value of the budget field.
    budget: String,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a category and return its 1-based index.
    ///
    /// The index is always (existing count) + 1; entries are never removed
    /// individually, so indices stay sequential until a clear.
    pub fn add_entry(&mut self, category: Category, entry: Entry) -> usize {
        let list = self.entries.entry(category).or_default();
        list.push(entry);
        list.len()
    }

    /// Index the next added entry in this category would get.
    pub fn next_index(&self, category: Category) -> usize {
        self.entry_count(category) + 1
    }

    /// Entries currently in a category.
    pub fn entries(&self, category: Category) -> &[Entry] {
        self.entries.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of entries in a category.
    pub fn entry_count(&self, category: Category) -> usize {
        self.entries(category).len()
    }

    /// Total entries across all categories.
    pub fn total_entries(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|c| self.entry_count(c))
            .sum()
    }

    /// Raw calorie field values of a category, in entry order.
    pub fn calorie_values(&self, category: Category) -> impl Iterator<Item = &str> {
        self.entries(category).iter().map(|e| e.calories.as_str())
    }

    pub fn set_budget(&mut self, raw: String) {
        self.budget = raw;
    }

    /// Raw value of the budget field ("" when never set or cleared).
    pub fn budget_raw(&self) -> &str {
        &self.budget
    }

    /// Remove all entries from every category and blank the budget field.
    /// Irreversible; there is no undo.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.budget.clear();
    }

    /// Whether the form holds no entries and no budget value.
    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0 && self.budget.is_empty()
    }
}
