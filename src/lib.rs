//! Wattle-Guard Library
//!
//! A lightweight data sovereignty probe for a single web endpoint:
//! - Resolves the endpoint and looks up where it is hosted (APP 8)
//! - Checks that the transport is encrypted (APP 11)
//! - Labels the hosting jurisdiction's legal risk from a lookup table
//! - Assembles a JSON compliance report with a go/no-go recommendation
//!
//! # Usage
//!
//! ```rust,ignore
//! use wattle_guard::{Auditor, Settings};
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = Settings::default();
//!     let auditor = Auditor::from_settings(&settings).unwrap();
//!     let report = auditor.run("https://example.com.au", &|_| {}).await;
//!     println!("{}", report.recommendation);
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{JurisdictionTable, Settings};
pub use models::{AuditReport, GeoResult, Recommendation, RiskLevel, SecurityResult};
pub use runner::{AuditEvent, Auditor};
pub use utils::ToolkitError;
