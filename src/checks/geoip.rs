//! Geo-IP lookup client
//!
//! Queries an ip-api.com compatible service for the country, region and ISP
//! behind an IP address.

use crate::config::settings::GeoIpSettings;
use crate::models::{Location, UNKNOWN};
use crate::utils::GeoIpError;
use serde::Deserialize;
use std::net::IpAddr;

/// Response from ip-api.com
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: Option<String>,
    message: Option<String>,
    country: Option<String>,
    region: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    isp: Option<String>,
}

impl IpApiResponse {
    fn into_location(self, ip: IpAddr) -> Result<Location, GeoIpError> {
        if self.status.as_deref() == Some("fail") {
            return Err(GeoIpError::Rejected {
                ip,
                message: self.message.unwrap_or_else(|| "lookup failed".to_string()),
            });
        }

        Ok(Location {
            ip,
            country: self.country.unwrap_or_else(|| UNKNOWN.to_string()),
            region: self
                .region_name
                .or(self.region)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            isp: self.isp.unwrap_or_else(|| UNKNOWN.to_string()),
        })
    }
}

/// HTTP client for the geo-IP service
pub struct GeoIpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GeoIpClient {
    /// Create a new client from settings
    pub fn new(settings: &GeoIpSettings) -> Result<Self, GeoIpError> {
        if settings.is_plaintext() {
            tracing::warn!(
                "Geo-IP endpoint {} is plaintext HTTP; lookups can be observed or altered in transit",
                settings.endpoint
            );
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| GeoIpError::ClientSetup {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Look up the hosting location of an IP address
    pub async fn lookup(&self, ip: IpAddr) -> Result<Location, GeoIpError> {
        let url = format!("{}/{}", self.endpoint, ip);
        tracing::debug!("Querying geo-IP service: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeoIpError::RequestFailed {
                ip,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(GeoIpError::BadStatus {
                ip,
                status: response.status().as_u16(),
            });
        }

        let api_response: IpApiResponse =
            response
                .json()
                .await
                .map_err(|e| GeoIpError::MalformedResponse {
                    ip,
                    message: e.to_string(),
                })?;

        api_response.into_location(ip)
    }
}
