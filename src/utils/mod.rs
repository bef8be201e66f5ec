//! Utility modules for wattle-guard
//!
//! Error types, target normalization and progress indicators.

pub mod domain;
pub mod error;
pub mod progress;

pub use domain::host_component;
pub use error::{ConfigError, DnsError, GeoIpError, TlsError, ToolkitError};
