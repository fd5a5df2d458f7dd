pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_budget, prompt_category, prompt_entry, prompt_menu, prompt_yes_no, MenuAction,
};
pub use render::{
    display_entries, display_invalid, display_report, fmt_calories, render_report_json,
};
