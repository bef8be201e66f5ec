//! TLS transport checker
//!
//! Performs a standard verifying TLS handshake against the target and reports
//! the negotiated cipher and the issuer of the presented certificate. Any
//! failure is reported as an insecure transport rather than an error.

use crate::config::settings::TransportSettings;
use crate::models::{CipherInfo, SecurityResult};
use crate::utils::TlsError;
use rustls::pki_types::{CertificateDer, ServerName};
use rustls::{ClientConfig, ProtocolVersion, RootCertStore};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use x509_parser::prelude::*;

/// Something that can report whether a hostname's transport is encrypted
pub trait TransportProbe {
    fn inspect(&self, host: &str) -> impl Future<Output = SecurityResult> + Send;
}

/// rustls implementation of [`TransportProbe`]
pub struct TlsChecker {
    settings: TransportSettings,
    connector: TlsConnector,
}

impl TlsChecker {
    /// Create a new TLS checker trusting the bundled Mozilla root store
    pub fn new(settings: TransportSettings) -> Self {
        let root_store = RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        Self::with_root_store(settings, root_store)
    }

    /// Create a TLS checker trusting only the given roots
    pub(crate) fn with_root_store(settings: TransportSettings, root_store: RootCertStore) -> Self {
        // Ensure a default crypto provider is installed (needed when multiple
        // providers are available)
        let _ = rustls::crypto::ring::default_provider().install_default();

        let config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        Self {
            settings,
            connector: TlsConnector::from(Arc::new(config)),
        }
    }

    pub fn port(&self) -> u16 {
        self.settings.port
    }

    /// Connect, handshake and describe the session.
    ///
    /// The TCP socket and TLS session are owned by this call and closed
    /// before it returns.
    pub async fn handshake(&self, host: &str) -> Result<SecurityResult, TlsError> {
        let port = self.settings.port;

        let server_name =
            ServerName::try_from(host.to_string()).map_err(|_| TlsError::ConfigurationError {
                message: format!("Invalid server name: {}", host),
            })?;

        let stream =
            tokio::time::timeout(self.settings.connect_timeout(), TcpStream::connect((host, port)))
                .await
                .map_err(|_| TlsError::ConnectTimeout {
                    host: host.to_string(),
                    port,
                })?
                .map_err(|e| TlsError::ConnectionFailed {
                    host: host.to_string(),
                    port,
                    message: e.to_string(),
                })?;

        let mut tls_stream = tokio::time::timeout(
            self.settings.handshake_timeout(),
            self.connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| TlsError::HandshakeTimeout)?
        .map_err(|e| TlsError::HandshakeFailed {
            message: e.to_string(),
        })?;

        let (_, connection) = tls_stream.get_ref();

        let protocol = match connection.protocol_version() {
            Some(ProtocolVersion::TLSv1_3) => "TLSv1.3".to_string(),
            Some(ProtocolVersion::TLSv1_2) => "TLSv1.2".to_string(),
            Some(other) => format!("{:?}", other),
            None => "Unknown".to_string(),
        };

        let cipher = connection
            .negotiated_cipher_suite()
            .map(|cs| CipherInfo::from_suite(format!("{:?}", cs.suite()), protocol));

        let issuer = connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .map(issuer_fields)
            .unwrap_or_default();

        if let Err(e) = tls_stream.shutdown().await {
            tracing::debug!("TLS shutdown for {} did not complete cleanly: {}", host, e);
        }

        Ok(SecurityResult::Encrypted { cipher, issuer })
    }
}

impl TransportProbe for TlsChecker {
    async fn inspect(&self, host: &str) -> SecurityResult {
        match self.handshake(host).await {
            Ok(result) => {
                tracing::debug!("TLS handshake with {}:{} succeeded", host, self.port());
                result
            }
            Err(e) => {
                tracing::warn!("TLS inspection of {}:{} failed: {}", host, self.port(), e);
                SecurityResult::insecure(e)
            }
        }
    }
}

/// Extract the issuer distinguished name of a DER certificate
fn issuer_fields(der: &CertificateDer<'_>) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();

    let cert = match X509Certificate::from_der(der.as_ref()) {
        Ok((_, cert)) => cert,
        Err(e) => {
            tracing::warn!("Failed to parse peer certificate: {:?}", e);
            return fields;
        }
    };

    for attr in cert.issuer().iter_attributes() {
        if let Ok(value) = attr.as_str() {
            let key = attribute_name(&attr.attr_type().to_id_string());
            fields.insert(key, value.to_string());
        }
    }

    fields
}

/// Long attribute name for common X.520 OIDs
fn attribute_name(oid: &str) -> String {
    match oid {
        "2.5.4.3" => "commonName",
        "2.5.4.6" => "countryName",
        "2.5.4.7" => "localityName",
        "2.5.4.8" => "stateOrProvinceName",
        "2.5.4.10" => "organizationName",
        "2.5.4.11" => "organizationalUnitName",
        "2.5.4.5" => "serialNumber",
        "1.2.840.113549.1.9.1" => "emailAddress",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcgen::{
        BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, KeyPair, SanType,
    };
    use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
    use std::time::Duration;
    use tokio::io::AsyncReadExt;
    use tokio_rustls::TlsAcceptor;

    #[test]
    fn test_attribute_names() {
        assert_eq!(attribute_name("2.5.4.3"), "commonName");
        assert_eq!(attribute_name("2.5.4.10"), "organizationName");
        assert_eq!(attribute_name("1.2.3.4"), "1.2.3.4");
    }

    #[test]
    fn test_unparseable_certificate_yields_no_fields() {
        let der = CertificateDer::from(vec![0x30, 0x03, 0x01, 0x01, 0xff]);
        assert!(issuer_fields(&der).is_empty());
    }

    /// Serve one TLS session on 127.0.0.1 with a leaf issued by a fresh test CA
    async fn spawn_tls_server(
        ca_name: &str,
    ) -> (u16, CertificateDer<'static>, tokio::task::JoinHandle<()>) {
        let ca_key = KeyPair::generate().unwrap();
        let mut ca_params = CertificateParams::new(Vec::<String>::new()).unwrap();
        ca_params.distinguished_name = DistinguishedName::new();
        ca_params.distinguished_name.push(DnType::CommonName, ca_name);
        ca_params.distinguished_name.push(DnType::OrganizationName, "Wattle Guard Tests");
        ca_params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        let ca_cert = ca_params.self_signed(&ca_key).unwrap();

        let leaf_key = KeyPair::generate().unwrap();
        let mut leaf_params = CertificateParams::new(Vec::<String>::new()).unwrap();
        leaf_params.subject_alt_names = vec![SanType::IpAddress("127.0.0.1".parse().unwrap())];
        let leaf_cert = leaf_params.signed_by(&leaf_key, &ca_cert, &ca_key).unwrap();

        let _ = rustls::crypto::ring::default_provider().install_default();
        let server_config = rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(
                vec![leaf_cert.der().clone(), ca_cert.der().clone()],
                PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(leaf_key.serialize_der())),
            )
            .unwrap();
        let acceptor = TlsAcceptor::from(Arc::new(server_config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            if let Ok((socket, _)) = listener.accept().await {
                if let Ok(mut tls) = acceptor.accept(socket).await {
                    let mut buf = Vec::new();
                    let _ = tls.read_to_end(&mut buf).await;
                }
            }
        });

        (port, ca_cert.der().clone(), server)
    }

    #[tokio::test]
    async fn test_successful_handshake_reports_cipher_and_issuer() {
        let (port, ca_der, server) = spawn_tls_server("Wattle Test CA").await;

        let mut roots = RootCertStore::empty();
        roots.add(ca_der).unwrap();
        let checker = TlsChecker::with_root_store(
            TransportSettings {
                port,
                connect_timeout_secs: 2,
                handshake_timeout_secs: 2,
            },
            roots,
        );

        let result = checker.inspect("127.0.0.1").await;
        assert!(result.tls_valid(), "unexpected result: {:?}", result);

        let cipher = result.cipher().unwrap();
        assert_eq!(cipher.protocol, "TLSv1.3");
        assert!(cipher.name.starts_with("TLS13_"));
        assert!(cipher.bits == 128 || cipher.bits == 256);

        let issuer = result.issuer().unwrap();
        assert_eq!(issuer["commonName"], "Wattle Test CA");
        assert_eq!(issuer["organizationName"], "Wattle Guard Tests");

        // close_notify from the client ends the server's read
        tokio::time::timeout(Duration::from_secs(2), server)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_untrusted_certificate_is_insecure() {
        let (port, _, server) = spawn_tls_server("Untrusted CA").await;

        let checker = TlsChecker::new(TransportSettings {
            port,
            connect_timeout_secs: 2,
            handshake_timeout_secs: 2,
        });

        let result = checker.inspect("127.0.0.1").await;
        assert!(!result.tls_valid());
        assert!(result.cipher().is_none());
        server.abort();
    }

    #[tokio::test]
    async fn test_plaintext_server_fails_handshake() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let _ = socket
                    .write_all(b"HTTP/1.1 400 Bad Request\r\n\r\n")
                    .await;
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        });

        let checker = TlsChecker::new(TransportSettings {
            port,
            connect_timeout_secs: 2,
            handshake_timeout_secs: 2,
        });

        let result = checker.handshake("127.0.0.1").await;
        assert!(result.is_err());
        server.abort();
    }
}
