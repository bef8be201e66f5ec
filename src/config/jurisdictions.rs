//! Jurisdiction lookup table

use serde::Deserialize;

/// Country sets used by the risk classifier.
///
/// Names are compared exactly against the country string returned by the
/// geo-IP service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JurisdictionTable {
    /// The home jurisdiction; an exact match is always low risk
    pub sovereign: String,
    /// Adjective used in the auditor note, e.g. "Australian"
    pub sovereign_demonym: String,
    /// Jurisdictions with extraterritorial data access laws
    pub high_risk: Vec<String>,
    /// Jurisdictions with adequate privacy protections
    pub safe: Vec<String>,
}

impl Default for JurisdictionTable {
    fn default() -> Self {
        Self {
            sovereign: "Australia".to_string(),
            sovereign_demonym: "Australian".to_string(),
            high_risk: ["United States", "China", "Russia", "India"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            safe: [
                "Australia",
                "Switzerland",
                "United Kingdom",
                "Germany",
                "New Zealand",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl JurisdictionTable {
    pub fn is_sovereign(&self, country: &str) -> bool {
        self.sovereign == country
    }

    pub fn is_high_risk(&self, country: &str) -> bool {
        self.high_risk.iter().any(|c| c == country)
    }

    pub fn is_safe(&self, country: &str) -> bool {
        self.safe.iter().any(|c| c == country)
    }
}
