//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wattle-guard")]
#[command(version)]
#[command(
    about = "Audit a vendor endpoint for data sovereignty and transport security",
    long_about = None
)]
pub struct Cli {
    /// Vendor URL or domain to audit (prompted for when omitted)
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Path to a TOML settings file (default: config/default.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Whether the target must be read from an interactive prompt
    pub fn needs_prompt(&self) -> bool {
        self.target.is_none()
    }

    /// Default log filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
