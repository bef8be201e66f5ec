//! Custom error types for wattle-guard
//!
//! Each audit stage has its own error enum. Stage errors never escape the
//! pipeline: they are folded into the stage's result type so the report can
//! still be produced.

use std::net::IpAddr;
use thiserror::Error;

/// Failure anywhere in the DNS → geo-IP chain of the location stage
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("DNS resolution error: {0}")]
    Dns(#[from] DnsError),

    #[error("Geo-IP lookup error: {0}")]
    GeoIp(#[from] GeoIpError),
}

/// DNS resolution errors
#[derive(Error, Debug)]
pub enum DnsError {
    #[error("Failed to create system resolver: {message}")]
    ResolverSetup { message: String },

    #[error("No IPv4 address found for domain: {domain}")]
    NoIpv4Address { domain: String },

    #[error("DNS query timed out for {domain}")]
    Timeout { domain: String },

    #[error("DNS resolution failed for {domain}: {message}")]
    ResolutionFailed { domain: String, message: String },
}

/// Geo-IP service errors
#[derive(Error, Debug)]
pub enum GeoIpError {
    #[error("Failed to build HTTP client: {message}")]
    ClientSetup { message: String },

    #[error("Geo-IP request for {ip} failed: {message}")]
    RequestFailed { ip: IpAddr, message: String },

    #[error("Geo-IP service returned HTTP {status} for {ip}")]
    BadStatus { ip: IpAddr, status: u16 },

    #[error("Malformed geo-IP response for {ip}: {message}")]
    MalformedResponse { ip: IpAddr, message: String },

    #[error("Geo-IP service rejected {ip}: {message}")]
    Rejected { ip: IpAddr, message: String },
}

/// TLS transport errors
#[derive(Error, Debug)]
pub enum TlsError {
    #[error("Connection to {host}:{port} timed out")]
    ConnectTimeout { host: String, port: u16 },

    #[error("Connection to {host}:{port} failed: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        message: String,
    },

    #[error("TLS handshake timed out")]
    HandshakeTimeout,

    #[error("TLS handshake failed: {message}")]
    HandshakeFailed { message: String },

    #[error("TLS configuration error: {message}")]
    ConfigurationError { message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
