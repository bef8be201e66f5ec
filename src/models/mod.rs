//! Data models for wattle-guard
//!
//! Stage result types and the final audit report.

pub mod audit_report;
pub mod geo_result;
pub mod risk;
pub mod security_result;

pub use audit_report::{AuditReport, SecuritySection, SovereigntySection};
pub use geo_result::{GeoResult, Location, UNKNOWN};
pub use risk::{Recommendation, RiskAssessment, RiskLevel};
pub use security_result::{CipherInfo, SecurityResult, INSECURE_NOTE};
