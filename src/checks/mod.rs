//! Check modules for wattle-guard
//!
//! One module per audit stage, plus the clients they are built from.

pub mod dns;
pub mod geoip;
pub mod location;
pub mod risk;
pub mod tls;

pub use dns::DnsChecker;
pub use geoip::GeoIpClient;
pub use location::{LocationChecker, LocationProbe};
pub use risk::RiskClassifier;
pub use tls::{TlsChecker, TransportProbe};
