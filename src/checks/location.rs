//! Hosting location stage
//!
//! Resolves the target hostname and asks the geo-IP service where that
//! address lives. Any failure becomes a `GeoResult::Failed`.

use super::dns::DnsChecker;
use super::geoip::GeoIpClient;
use crate::config::Settings;
use crate::models::GeoResult;
use crate::utils::{GeoIpError, ToolkitError};
use std::future::Future;
use std::net::IpAddr;

/// Something that can report where a hostname is hosted
pub trait LocationProbe {
    fn locate(&self, host: &str) -> impl Future<Output = GeoResult> + Send;
}

/// DNS + geo-IP implementation of [`LocationProbe`]
pub struct LocationChecker {
    dns: DnsChecker,
    geoip: GeoIpClient,
}

impl LocationChecker {
    pub fn new(settings: &Settings) -> Result<Self, GeoIpError> {
        Ok(Self {
            dns: DnsChecker::new(settings.dns.timeout()),
            geoip: GeoIpClient::new(&settings.geoip)?,
        })
    }

    async fn try_locate(&self, host: &str) -> Result<GeoResult, ToolkitError> {
        let ip = self.dns.resolve_ipv4(host).await?;
        let location = self.geoip.lookup(IpAddr::V4(ip)).await?;
        Ok(GeoResult::Located(location))
    }
}

impl LocationProbe for LocationChecker {
    async fn locate(&self, host: &str) -> GeoResult {
        match self.try_locate(host).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Location lookup for {} failed: {}", host, e);
                GeoResult::failure(e)
            }
        }
    }
}
