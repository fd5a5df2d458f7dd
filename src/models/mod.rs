mod category;
mod entry;
mod report;

pub use category::Category;
pub use entry::Entry;
pub use report::{Balance, CalorieReport};
