//! CLI subcommand implementations.

pub mod day;
pub mod export;
pub mod overtime;
pub mod travel;
pub mod util;
pub mod week;
