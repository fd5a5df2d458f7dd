pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod tally;

pub use error::{CounterError, Result};
pub use models::{Balance, CalorieReport, Category, Entry};
