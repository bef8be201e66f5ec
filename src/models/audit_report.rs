//! Audit report with overall recommendation

use super::{CipherInfo, GeoResult, Recommendation, RiskAssessment, RiskLevel, SecurityResult};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::IpAddr;

/// Where the data lives and what that means legally (APP 8)
#[derive(Debug, Clone, Serialize)]
pub struct SovereigntySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<IpAddr>,
    pub physical_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
    pub jurisdiction_risk: RiskLevel,
    pub auditor_note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_error: Option<String>,
}

/// Transport protection of data in transit (APP 11)
#[derive(Debug, Clone, Serialize)]
pub struct SecuritySection {
    pub encrypted_transit: bool,
    pub cipher_strength: Option<CipherInfo>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub certificate_issuer: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The compliance artifact produced by one audit run
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub timestamp: DateTime<Local>,
    pub target: String,
    pub compliance_frameworks: Vec<String>,
    pub data_sovereignty: SovereigntySection,
    pub app_11_security: SecuritySection,
    pub recommendation: Recommendation,
}

impl AuditReport {
    /// Assemble a report from the outputs of the earlier stages
    pub fn assemble(
        target: impl Into<String>,
        geo: &GeoResult,
        security: &SecurityResult,
        risk: RiskAssessment,
        compliance_frameworks: Vec<String>,
        timestamp: DateTime<Local>,
    ) -> Self {
        let recommendation = Recommendation::for_risk(risk.level);

        let data_sovereignty = SovereigntySection {
            ip: geo.ip(),
            physical_location: geo.physical_location(),
            isp: geo.isp().map(str::to_string),
            jurisdiction_risk: risk.level,
            auditor_note: risk.reason,
            lookup_error: geo.error().map(str::to_string),
        };

        let app_11_security = SecuritySection {
            encrypted_transit: security.tls_valid(),
            cipher_strength: security.cipher().cloned(),
            certificate_issuer: security.issuer().cloned().unwrap_or_default(),
            note: security.note(),
        };

        Self {
            timestamp,
            target: target.into(),
            compliance_frameworks,
            data_sovereignty,
            app_11_security,
            recommendation,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.data_sovereignty.jurisdiction_risk
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level().is_high()
    }
}
