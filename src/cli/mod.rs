//! Command-line interface module
//!
//! Argument parsing with Clap and the interactive target prompt.

pub mod args;
pub mod interactive;

pub use args::Cli;
pub use interactive::{prompt_target, read_target};
