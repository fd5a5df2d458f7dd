use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{Category, Entry};

/// Actions available from the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddEntry,
    SetBudget,
    ShowEntries,
    Calculate,
    ShowReport,
    Clear,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 7] = [
        MenuAction::AddEntry,
        MenuAction::SetBudget,
        MenuAction::ShowEntries,
        MenuAction::Calculate,
        MenuAction::ShowReport,
        MenuAction::Clear,
        MenuAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::AddEntry => "Add entry",
            MenuAction::SetBudget => "Set budget",
            MenuAction::ShowEntries => "Show entries",
            MenuAction::Calculate => "Calculate",
            MenuAction::ShowReport => "Show last report",
            MenuAction::Clear => "Clear form",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next session action.
pub fn prompt_menu() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[selection])
}

/// Prompt for the category a new entry belongs to.
///
/// The set is closed: the five categories, nothing else.
pub fn prompt_category() -> Result<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();

    let selection = Select::new()
        .with_prompt("Add to which category?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Category::ALL[selection])
}

/// Prompt for a new entry's name and calorie fields.
///
/// Both fields accept anything, including nothing. Validation happens only
/// when a calculation pass reads the calorie value.
pub fn prompt_entry(index: usize) -> Result<Entry> {
    let name: String = Input::new()
        .with_prompt(format!("Entry {} name", index))
        .allow_empty(true)
        .interact_text()?;

    let calories: String = Input::new()
        .with_prompt(format!("Entry {} calories", index))
        .allow_empty(true)
        .interact_text()?;

    Ok(Entry::new(name, calories))
}

/// Prompt for the raw budget field value.
pub fn prompt_budget() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Daily calorie budget")
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
