//! Command implementations

pub mod benchmark;
pub mod find;
pub mod interactive;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use find::{FindConfig, FindResult, find_ladder};
pub use interactive::run_interactive;
