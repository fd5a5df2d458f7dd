use clap::{Args, Parser, Subcommand};

/// CalorieCounter - track meal and exercise entries against a daily budget.
#[derive(Parser, Debug)]
#[command(name = "calorie_counter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive counting session.
    Session,

    /// Compute a one-shot report from values passed as flags.
    Calc(CalcArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Session
    }
}

/// Raw field values for a one-shot calculation. Values go through the same
/// sanitize/validate path as session input, so "+500", " 300 ", or garbage
/// are all accepted here and resolved at calculation time.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Daily calorie budget.
    #[arg(long, default_value = "")]
    pub budget: String,

    /// Breakfast calorie values (repeatable).
    #[arg(long, value_name = "CALORIES")]
    pub breakfast: Vec<String>,

    /// Lunch calorie values (repeatable).
    #[arg(long, value_name = "CALORIES")]
    pub lunch: Vec<String>,

    /// Dinner calorie values (repeatable).
    #[arg(long, value_name = "CALORIES")]
    pub dinner: Vec<String>,

    /// Snack calorie values (repeatable).
    #[arg(long, value_name = "CALORIES")]
    pub snacks: Vec<String>,

    /// Exercise calorie values (repeatable).
    #[arg(long, value_name = "CALORIES")]
    pub exercise: Vec<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
