use clap::Parser;

use calorie_counter_rs::cli::{CalcArgs, Cli, Command};
use calorie_counter_rs::error::{CounterError, Result};
use calorie_counter_rs::interface::{
    display_entries, display_invalid, display_report, prompt_budget, prompt_category,
    prompt_entry, prompt_menu, prompt_yes_no, render_report_json, MenuAction,
};
use calorie_counter_rs::models::{CalorieReport, Category, Entry};
use calorie_counter_rs::state::CounterState;
use calorie_counter_rs::tally::calculate_report;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session => cmd_session(),
        Command::Calc(args) => cmd_calc(args),
    }
}

/// Interactive counting session: the CLI rendition of the counter form.
fn cmd_session() -> Result<()> {
    let mut state = CounterState::new();
    let mut last_report: Option<CalorieReport> = None;

    println!("Calorie Counter");
    println!("Log meal and exercise entries, set a budget, then calculate.");
    println!();

    loop {
        match prompt_menu()? {
            MenuAction::AddEntry => {
                let category = prompt_category()?;
                let index = state.next_index(category);
                let entry = prompt_entry(index)?;
                state.add_entry(category, entry);
                println!("Added entry {} to {}.", index, category);
            }

            MenuAction::SetBudget => {
                state.set_budget(prompt_budget()?);
            }

            MenuAction::ShowEntries => display_entries(&state),

            MenuAction::Calculate => match calculate_report(&state) {
                Ok(report) => {
                    display_report(&report);
                    last_report = Some(report);
                }
                // Rejected pass: alert per fragment, previous report stays
                Err(CounterError::InvalidCalorieValues(fragments)) => {
                    display_invalid(&fragments)
                }
                Err(e) => return Err(e),
            },

            MenuAction::ShowReport => match &last_report {
                Some(report) => display_report(report),
                None => println!("No report yet. Calculate first."),
            },

            MenuAction::Clear => {
                if prompt_yes_no("Clear all entries and the budget?", false)? {
                    state.clear();
                    last_report = None;
                    println!("Form cleared.");
                }
            }

            MenuAction::Quit => break,
        }
        println!();
    }

    Ok(())
}

/// One-shot calculation from command-line values.
fn cmd_calc(args: CalcArgs) -> Result<()> {
    let mut state = CounterState::new();
    state.set_budget(args.budget);

    let groups = [
        (Category::Breakfast, args.breakfast),
        (Category::Lunch, args.lunch),
        (Category::Dinner, args.dinner),
        (Category::Snacks, args.snacks),
        (Category::Exercise, args.exercise),
    ];
    for (category, values) in groups {
        for calories in values {
            state.add_entry(category, Entry::new("", calories));
        }
    }

    match calculate_report(&state) {
        Ok(report) => {
            if args.json {
                println!("{}", render_report_json(&report)?);
            } else {
                display_report(&report);
            }
            Ok(())
        }
        Err(CounterError::InvalidCalorieValues(fragments)) => {
            display_invalid(&fragments);
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}
