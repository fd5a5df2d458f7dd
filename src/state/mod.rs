mod manager;

pub use manager::CounterState;
