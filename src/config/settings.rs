//! Application settings configuration
//!
//! Defines geo-IP, DNS and transport settings, the jurisdiction table and
//! report wording.

use super::jurisdictions::JurisdictionTable;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// DNS settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DnsSettings {
    pub timeout_secs: u64,
}

impl Default for DnsSettings {
    fn default() -> Self {
        Self { timeout_secs: 5 }
    }
}

impl DnsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Geo-IP service settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeoIpSettings {
    /// Base URL; the IP address is appended as the final path segment
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for GeoIpSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://ip-api.com/json".to_string(),
            timeout_secs: 5,
        }
    }
}

impl GeoIpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when lookups would travel over unencrypted HTTP
    pub fn is_plaintext(&self) -> bool {
        self.endpoint
            .trim_start()
            .to_ascii_lowercase()
            .starts_with("http://")
    }
}

/// TLS transport settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    pub port: u16,
    pub connect_timeout_secs: u64,
    pub handshake_timeout_secs: u64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            port: 443,
            connect_timeout_secs: 10,
            handshake_timeout_secs: 10,
        }
    }
}

impl TransportSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }
}

/// Report wording and penalty figures
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub compliance_frameworks: Vec<String>,
    pub penalty_max_aud: u64,
    pub penalty_turnover_percent: u8,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            compliance_frameworks: vec![
                "Privacy Act 1988 (Cth)".to_string(),
                "APP 8".to_string(),
                "SOCI Act 2018".to_string(),
            ],
            penalty_max_aud: 50_000_000,
            penalty_turnover_percent: 30,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dns: DnsSettings,
    #[serde(default)]
    pub geoip: GeoIpSettings,
    #[serde(default)]
    pub transport: TransportSettings,
    #[serde(default)]
    pub jurisdictions: JurisdictionTable,
    #[serde(default)]
    pub report: ReportSettings,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse settings from TOML text and validate them
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.transport.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "transport.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }
        if self.geoip.endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "geoip.endpoint".to_string(),
                message: "endpoint must not be empty".to_string(),
            });
        }
        if self.jurisdictions.sovereign.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "jurisdictions.sovereign".to_string(),
                message: "sovereign jurisdiction must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
