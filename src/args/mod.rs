//! Command-line argument parsing and handling.

pub mod definition;
pub mod print;

pub use definition::{Args, determine_log_level};
pub use print::handle_print;
