//! Hosting location result types

use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Placeholder for any location field the lookup could not provide
pub const UNKNOWN: &str = "Unknown";

/// Where the target is hosted, as reported by the geo-IP service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub ip: IpAddr,
    pub country: String,
    pub region: String,
    pub isp: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.ip, self.region, self.country)
    }
}

/// Outcome of the resolver stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GeoResult {
    Located(Location),
    Failed { error: String },
}

impl GeoResult {
    /// Create a failed result from any displayable error
    pub fn failure(error: impl fmt::Display) -> Self {
        GeoResult::Failed {
            error: error.to_string(),
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            GeoResult::Located(location) => Some(location),
            GeoResult::Failed { .. } => None,
        }
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.location().map(|l| l.ip)
    }

    /// Country name, or "Unknown" when the lookup failed
    pub fn country(&self) -> &str {
        self.location().map(|l| l.country.as_str()).unwrap_or(UNKNOWN)
    }

    /// Region name, or "Unknown" when the lookup failed
    pub fn region(&self) -> &str {
        self.location().map(|l| l.region.as_str()).unwrap_or(UNKNOWN)
    }

    pub fn isp(&self) -> Option<&str> {
        self.location().map(|l| l.isp.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GeoResult::Failed { error } => Some(error),
            GeoResult::Located(_) => None,
        }
    }

    /// "Region, Country" as shown in the report
    pub fn physical_location(&self) -> String {
        format!("{}, {}", self.region(), self.country())
    }
}
