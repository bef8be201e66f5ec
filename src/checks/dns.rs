//! DNS resolution checker
//!
//! Resolves the audit target to an IPv4 address using the system resolver
//! configuration.

use crate::utils::DnsError;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::Resolver;
use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, Instant};

/// Type alias for the Tokio async resolver
type TokioResolver = Resolver<TokioConnectionProvider>;

/// DNS checker backed by the system resolver
pub struct DnsChecker {
    timeout: Duration,
}

impl DnsChecker {
    /// Create a new DNS checker with the given query timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolve a domain to its first IPv4 address
    pub async fn resolve_ipv4(&self, domain: &str) -> Result<Ipv4Addr, DnsError> {
        let start = Instant::now();

        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| DnsError::ResolverSetup {
                message: e.to_string(),
            })?
            .build();

        let lookup = match tokio::time::timeout(self.timeout, resolver.lookup_ip(domain)).await {
            Ok(Ok(lookup)) => lookup,
            Ok(Err(e)) => {
                return Err(DnsError::ResolutionFailed {
                    domain: domain.to_string(),
                    message: e.to_string(),
                })
            }
            Err(_) => {
                return Err(DnsError::Timeout {
                    domain: domain.to_string(),
                })
            }
        };

        let address = lookup
            .iter()
            .find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| DnsError::NoIpv4Address {
                domain: domain.to_string(),
            })?;

        tracing::debug!(
            "Resolved {} to {} in {}ms",
            domain,
            address,
            start.elapsed().as_millis()
        );
        Ok(address)
    }
}

