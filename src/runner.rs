//! Audit orchestration engine
//!
//! Drives the four audit stages in order and emits events so any frontend
//! can show progress. Every stage degrades into data on failure, so a run
//! always ends with a report.

use crate::checks::{LocationChecker, LocationProbe, RiskClassifier, TlsChecker, TransportProbe};
use crate::config::Settings;
use crate::models::{AuditReport, GeoResult, RiskLevel, SecurityResult};
use crate::utils::{host_component, GeoIpError};
use chrono::Local;

/// Events emitted during an audit
pub enum AuditEvent {
    LocationStarted { target: String },
    LocationComplete(GeoResult),
    TransportStarted { target: String },
    TransportComplete(SecurityResult),
    RiskComplete { level: RiskLevel },
}

/// Runs the audit pipeline against one target
pub struct Auditor<L, T> {
    location: L,
    transport: T,
    classifier: RiskClassifier,
    compliance_frameworks: Vec<String>,
}

impl Auditor<LocationChecker, TlsChecker> {
    /// Build an auditor backed by real DNS, geo-IP and TLS checks
    pub fn from_settings(settings: &Settings) -> Result<Self, GeoIpError> {
        Ok(Self::new(
            LocationChecker::new(settings)?,
            TlsChecker::new(settings.transport.clone()),
            RiskClassifier::new(settings.jurisdictions.clone()),
            settings.report.compliance_frameworks.clone(),
        ))
    }
}

impl<L: LocationProbe, T: TransportProbe> Auditor<L, T> {
    pub fn new(
        location: L,
        transport: T,
        classifier: RiskClassifier,
        compliance_frameworks: Vec<String>,
    ) -> Self {
        Self {
            location,
            transport,
            classifier,
            compliance_frameworks,
        }
    }

    /// Audit a URL or bare domain
    pub async fn run(&self, target: &str, on_event: &dyn Fn(AuditEvent)) -> AuditReport {
        let domain = host_component(target);
        tracing::debug!("Auditing {} (input: {:?})", domain, target);

        on_event(AuditEvent::LocationStarted {
            target: domain.clone(),
        });
        let geo = self.location.locate(&domain).await;
        on_event(AuditEvent::LocationComplete(geo.clone()));

        on_event(AuditEvent::TransportStarted {
            target: domain.clone(),
        });
        let security = self.transport.inspect(&domain).await;
        on_event(AuditEvent::TransportComplete(security.clone()));

        let risk = self.classifier.classify(geo.country());
        on_event(AuditEvent::RiskComplete { level: risk.level });

        AuditReport::assemble(
            domain,
            &geo,
            &security,
            risk,
            self.compliance_frameworks.clone(),
            Local::now(),
        )
    }
}
