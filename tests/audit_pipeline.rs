//! End-to-end pipeline tests with mocked location and transport stages.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use wattle_guard::checks::{LocationProbe, RiskClassifier, TransportProbe};
use wattle_guard::config::settings::ReportSettings;
use wattle_guard::models::{CipherInfo, Location};
use wattle_guard::output::{penalty_warning, to_json};
use wattle_guard::{
    AuditEvent, Auditor, GeoResult, JurisdictionTable, Recommendation, RiskLevel, SecurityResult,
};

struct FakeLocation {
    result: GeoResult,
    seen: Arc<Mutex<Vec<String>>>,
}

impl FakeLocation {
    fn new(result: GeoResult) -> Self {
        Self {
            result,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl LocationProbe for FakeLocation {
    async fn locate(&self, host: &str) -> GeoResult {
        self.seen.lock().unwrap().push(host.to_string());
        self.result.clone()
    }
}

struct FakeTransport(SecurityResult);

impl TransportProbe for FakeTransport {
    async fn inspect(&self, _host: &str) -> SecurityResult {
        self.0.clone()
    }
}

fn located(country: &str, region: &str) -> GeoResult {
    GeoResult::Located(Location {
        ip: "203.0.113.20".parse().unwrap(),
        country: country.to_string(),
        region: region.to_string(),
        isp: "Example ISP".to_string(),
    })
}

fn encrypted() -> SecurityResult {
    let mut issuer = BTreeMap::new();
    issuer.insert("commonName".to_string(), "Example CA".to_string());
    SecurityResult::Encrypted {
        cipher: Some(CipherInfo::from_suite("TLS13_AES_256_GCM_SHA384", "TLSv1.3")),
        issuer,
    }
}

fn auditor(
    geo: GeoResult,
    security: SecurityResult,
) -> Auditor<FakeLocation, FakeTransport> {
    Auditor::new(
        FakeLocation::new(geo),
        FakeTransport(security),
        RiskClassifier::default(),
        ReportSettings::default().compliance_frameworks,
    )
}

#[tokio::test]
async fn test_sovereign_target_proceeds() {
    let auditor = auditor(located("Australia", "NSW"), encrypted());
    let report = auditor.run("https://example.com.au", &|_| {}).await;

    assert_eq!(report.target, "example.com.au");
    assert_eq!(report.risk_level(), RiskLevel::Low);
    assert_eq!(report.recommendation, Recommendation::Proceed);
    assert!(report.app_11_security.encrypted_transit);
    assert!(penalty_warning(&report, &ReportSettings::default()).is_none());

    let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
    assert_eq!(json["data_sovereignty"]["jurisdiction_risk"], "LOW (Sovereign)");
    assert_eq!(json["data_sovereignty"]["physical_location"], "NSW, Australia");
    assert_eq!(json["recommendation"], "PROCEED");
    assert_eq!(
        json["compliance_frameworks"],
        serde_json::json!(["Privacy Act 1988 (Cth)", "APP 8", "SOCI Act 2018"])
    );
}

#[tokio::test]
async fn test_united_states_target_stops_with_warning() {
    let auditor = auditor(located("United States", "Virginia"), encrypted());
    let report = auditor.run("https://example.com", &|_| {}).await;

    assert_eq!(report.target, "example.com");
    assert_eq!(report.risk_level(), RiskLevel::High);
    assert_eq!(report.recommendation, Recommendation::StopAndAssess);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["data_sovereignty"]["jurisdiction_risk"], "HIGH (Cloud Act Risk)");
    assert_eq!(json["recommendation"], "STOP & ASSESS");

    let warning = penalty_warning(&report, &ReportSettings::default()).unwrap();
    assert!(warning.starts_with("WARNING: POTENTIAL APP 8 BREACH DETECTED."));
    assert!(warning.contains("$50,000,000 AUD"));
    assert!(warning.contains("30% of adjusted turnover"));
}

#[tokio::test]
async fn test_every_high_risk_country_stops() {
    for country in ["United States", "China", "Russia", "India"] {
        let report = auditor(located(country, "X"), encrypted())
            .run("vendor.example", &|_| {})
            .await;
        assert_eq!(report.risk_level(), RiskLevel::High, "{}", country);
        assert_eq!(report.recommendation, Recommendation::StopAndAssess);
    }
}

#[tokio::test]
async fn test_safe_country_is_medium() {
    for country in ["Switzerland", "United Kingdom", "Germany", "New Zealand"] {
        let report = auditor(located(country, "X"), encrypted())
            .run("vendor.example", &|_| {})
            .await;
        assert_eq!(report.risk_level(), RiskLevel::Medium, "{}", country);
        assert_eq!(report.recommendation, Recommendation::StopAndAssess);
    }
}

#[tokio::test]
async fn test_unlisted_country_is_unknown() {
    let report = auditor(located("Brazil", "Sao Paulo"), encrypted())
        .run("vendor.example", &|_| {})
        .await;
    assert_eq!(report.risk_level(), RiskLevel::Unknown);
    assert_eq!(report.data_sovereignty.auditor_note, "Manual review required.");
}

#[tokio::test]
async fn test_tls_failure_is_a_finding_not_an_error() {
    let report = auditor(
        located("Australia", "VIC"),
        SecurityResult::insecure("connection refused"),
    )
    .run("example.com.au", &|_| {})
    .await;

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["app_11_security"]["encrypted_transit"], false);
    assert!(json["app_11_security"]["cipher_strength"].is_null());
    assert!(json["app_11_security"]["note"]
        .as_str()
        .unwrap()
        .starts_with("Connection Not Secure (Breach of APP 11)"));
    // Risk is about jurisdiction only
    assert_eq!(report.recommendation, Recommendation::Proceed);
}

#[tokio::test]
async fn test_dns_failure_still_yields_assessment() {
    let report = auditor(
        GeoResult::failure("no record found"),
        SecurityResult::insecure("no route"),
    )
    .run("nowhere.invalid", &|_| {})
    .await;

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["data_sovereignty"]["jurisdiction_risk"], "UNKNOWN");
    assert_eq!(json["data_sovereignty"]["physical_location"], "Unknown, Unknown");
    assert_eq!(json["data_sovereignty"]["lookup_error"], "no record found");
    assert_eq!(json["recommendation"], "STOP & ASSESS");
}

#[tokio::test]
async fn test_stages_receive_host_component_only() {
    let location = FakeLocation::new(located("Australia", "NSW"));
    let seen = Arc::clone(&location.seen);
    let auditor = Auditor::new(
        location,
        FakeTransport(encrypted()),
        RiskClassifier::default(),
        vec![],
    );

    let report = auditor
        .run("https://Vendor.Example.com.au:8443/privacy?ref=1", &|_| {})
        .await;

    assert_eq!(report.target, "vendor.example.com.au");
    assert_eq!(seen.lock().unwrap().as_slice(), ["vendor.example.com.au"]);
}

#[tokio::test]
async fn test_events_follow_pipeline_order() {
    let auditor = auditor(located("Germany", "Hesse"), encrypted());
    let order = RefCell::new(Vec::new());

    let report = auditor
        .run("https://example.de/", &|event| {
            let name = match event {
                AuditEvent::LocationStarted { target } => {
                    assert_eq!(target, "example.de");
                    "location_started"
                }
                AuditEvent::LocationComplete(_) => "location_complete",
                AuditEvent::TransportStarted { .. } => "transport_started",
                AuditEvent::TransportComplete(_) => "transport_complete",
                AuditEvent::RiskComplete { level } => {
                    assert_eq!(level, RiskLevel::Medium);
                    "risk_complete"
                }
            };
            order.borrow_mut().push(name);
        })
        .await;

    assert_eq!(report.risk_level(), RiskLevel::Medium);
    assert_eq!(
        order.into_inner(),
        vec![
            "location_started",
            "location_complete",
            "transport_started",
            "transport_complete",
            "risk_complete",
        ]
    );
}

#[tokio::test]
async fn test_injected_jurisdiction_table() {
    let table = JurisdictionTable {
        sovereign: "New Zealand".to_string(),
        sovereign_demonym: "New Zealand".to_string(),
        high_risk: vec!["Australia".to_string()],
        safe: vec![],
    };
    let nz = Auditor::new(
        FakeLocation::new(located("New Zealand", "Auckland")),
        FakeTransport(encrypted()),
        RiskClassifier::new(table.clone()),
        vec![],
    );
    let report = nz.run("vendor.example.nz", &|_| {}).await;
    assert_eq!(report.recommendation, Recommendation::Proceed);
    assert_eq!(
        report.data_sovereignty.auditor_note,
        "Data resides within New Zealand jurisdiction."
    );

    let au = Auditor::new(
        FakeLocation::new(located("Australia", "NSW")),
        FakeTransport(encrypted()),
        RiskClassifier::new(table),
        vec![],
    );
    assert_eq!(
        au.run("vendor.example.au", &|_| {}).await.risk_level(),
        RiskLevel::High
    );
}
