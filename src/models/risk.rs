//! Jurisdiction risk types

use serde::Serialize;
use std::fmt;

/// Qualitative jurisdiction risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW (Sovereign)")]
    Low,
    #[serde(rename = "MEDIUM (GDPR Aligned)")]
    Medium,
    #[serde(rename = "HIGH (Cloud Act Risk)")]
    High,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl RiskLevel {
    /// Get the display string for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW (Sovereign)",
            RiskLevel::Medium => "MEDIUM (GDPR Aligned)",
            RiskLevel::High => "HIGH (Cloud Act Risk)",
            RiskLevel::Unknown => "UNKNOWN",
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk level plus the auditor's justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub reason: String,
}

impl RiskAssessment {
    pub fn new(level: RiskLevel, reason: impl Into<String>) -> Self {
        Self {
            level,
            reason: reason.into(),
        }
    }
}

/// Binary go/no-go outcome of an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "PROCEED")]
    Proceed,
    #[serde(rename = "STOP & ASSESS")]
    StopAndAssess,
}

impl Recommendation {
    /// Only a sovereign-hosted target may proceed without assessment
    pub fn for_risk(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Recommendation::Proceed,
            _ => Recommendation::StopAndAssess,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Proceed => "PROCEED",
            Recommendation::StopAndAssess => "STOP & ASSESS",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
