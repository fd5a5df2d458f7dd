pub mod aggregate;
pub mod input;

pub use aggregate::{calculate_report, sum_fields};
pub use input::{sanitize, scientific_fragment};
