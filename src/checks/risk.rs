//! Jurisdiction risk classifier

use crate::config::JurisdictionTable;
use crate::models::{RiskAssessment, RiskLevel};

/// Maps a hosting country to a risk label using a jurisdiction table.
///
/// Sets are checked in a fixed order: sovereign exact match, then high risk,
/// then safe. A country listed in more than one set takes the first match.
pub struct RiskClassifier {
    table: JurisdictionTable,
}

impl RiskClassifier {
    pub fn new(table: JurisdictionTable) -> Self {
        Self { table }
    }

    pub fn classify(&self, country: &str) -> RiskAssessment {
        if self.table.is_sovereign(country) {
            return RiskAssessment::new(
                RiskLevel::Low,
                format!(
                    "Data resides within {} jurisdiction.",
                    self.table.sovereign_demonym
                ),
            );
        }

        if self.table.is_high_risk(country) {
            return RiskAssessment::new(
                RiskLevel::High,
                format!(
                    "Server in {}. Requires detailed APP 8.1 assessment.",
                    country
                ),
            );
        }

        if self.table.is_safe(country) {
            return RiskAssessment::new(
                RiskLevel::Medium,
                format!("Server in {}. Likely compatible with APPs.", country),
            );
        }

        RiskAssessment::new(RiskLevel::Unknown, "Manual review required.")
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new(JurisdictionTable::default())
    }
}
