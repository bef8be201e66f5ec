//! Terminal output: audit banner and the high-risk penalty warning

use crate::config::settings::ReportSettings;
use crate::models::AuditReport;
use console::style;

/// Print the audit banner to stderr so stdout stays machine-readable
pub fn print_banner(target: &str) {
    eprintln!(
        "{} Initiating APP 8 Sovereignty Audit for {}...",
        style("WATTLE-GUARD:").green().bold(),
        style(target).cyan()
    );
    eprintln!();
}

/// Group digits with commas, e.g. 50000000 -> "50,000,000"
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The penalty warning block, present only for high-risk reports
pub fn penalty_warning(report: &AuditReport, settings: &ReportSettings) -> Option<String> {
    if !report.is_high_risk() {
        return None;
    }

    Some(format!(
        "WARNING: POTENTIAL APP 8 BREACH DETECTED.\n   \
         Under the new Privacy Legislation Amendment, max penalties allow for:\n   \
         - ${} AUD\n   \
         - Or {}% of adjusted turnover.",
        format_thousands(settings.penalty_max_aud),
        settings.penalty_turnover_percent
    ))
}

/// Print the penalty warning after the report when risk is high
pub fn print_penalty_warning(report: &AuditReport, settings: &ReportSettings) {
    if let Some(warning) = penalty_warning(report, settings) {
        let mut lines = warning.lines();
        println!();
        if let Some(first) = lines.next() {
            println!("{} {}", style("⚠").yellow(), style(first).red().bold());
        }
        for line in lines {
            println!("{}", line);
        }
    }
}
