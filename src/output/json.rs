//! JSON output formatter

use crate::models::AuditReport;

/// Render the report as indented JSON
pub fn to_json(report: &AuditReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Print the report as JSON to stdout
pub fn print_json(report: &AuditReport) -> anyhow::Result<()> {
    let json = to_json(report)?;
    println!("{}", json);
    Ok(())
}
