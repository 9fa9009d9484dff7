//! Devbook CLI
//!
//! Command-line access to every Devbook client operation. Results are printed
//! to stdout as JSON; logs go to stderr and `./logs`.

pub mod cli;
pub mod commands;
pub mod telemetry;

pub use cli::{Cli, Commands};
