//! Transport security result types

use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Note attached to every failed transport inspection
pub const INSECURE_NOTE: &str = "Connection Not Secure (Breach of APP 11)";

/// Negotiated cipher suite, serialized as `[name, protocol, bits]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherInfo {
    /// Cipher suite name (e.g., TLS13_AES_256_GCM_SHA384)
    pub name: String,
    /// Protocol version (e.g., TLSv1.3)
    pub protocol: String,
    /// Symmetric key size in bits
    pub bits: u16,
}

impl CipherInfo {
    /// Build cipher info from a suite name, deriving the key size from it
    pub fn from_suite(name: impl Into<String>, protocol: impl Into<String>) -> Self {
        let name = name.into();
        let bits = key_bits(&name);
        Self {
            name,
            protocol: protocol.into(),
            bits,
        }
    }
}

impl Serialize for CipherInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.protocol)?;
        tuple.serialize_element(&self.bits)?;
        tuple.end()
    }
}

impl fmt::Display for CipherInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} bits)", self.name, self.protocol, self.bits)
    }
}

/// Symmetric key size implied by a cipher suite name
fn key_bits(name: &str) -> u16 {
    let upper = name.to_ascii_uppercase();
    if upper.contains("AES_256") || upper.contains("CHACHA20") {
        256
    } else if upper.contains("AES_128") {
        128
    } else {
        0
    }
}

/// Outcome of the transport inspection stage
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum SecurityResult {
    Encrypted {
        cipher: Option<CipherInfo>,
        /// Issuer distinguished name of the leaf certificate, keyed by attribute
        issuer: BTreeMap<String, String>,
    },
    Insecure {
        note: String,
        reason: String,
    },
}

impl SecurityResult {
    /// Create an insecure result from any displayable error
    pub fn insecure(reason: impl fmt::Display) -> Self {
        SecurityResult::Insecure {
            note: INSECURE_NOTE.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn tls_valid(&self) -> bool {
        matches!(self, SecurityResult::Encrypted { .. })
    }

    pub fn cipher(&self) -> Option<&CipherInfo> {
        match self {
            SecurityResult::Encrypted { cipher, .. } => cipher.as_ref(),
            SecurityResult::Insecure { .. } => None,
        }
    }

    pub fn issuer(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            SecurityResult::Encrypted { issuer, .. } => Some(issuer),
            SecurityResult::Insecure { .. } => None,
        }
    }

    pub fn note(&self) -> Option<String> {
        match self {
            SecurityResult::Insecure { note, reason } if reason.is_empty() => Some(note.clone()),
            SecurityResult::Insecure { note, reason } => Some(format!("{}: {}", note, reason)),
            SecurityResult::Encrypted { .. } => None,
        }
    }
}
