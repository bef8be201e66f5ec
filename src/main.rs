//! Wattle-Guard - vendor data sovereignty probe
//!
//! Resolves where a vendor endpoint is hosted, checks that it is reached over
//! TLS, and prints a JSON compliance report with a recommendation.

use anyhow::Context;
use clap::Parser;
use console::style;
use indicatif::ProgressBar;
use std::cell::RefCell;
use tracing_subscriber::EnvFilter;
use wattle_guard::cli::{read_target, Cli};
use wattle_guard::config::load_settings;
use wattle_guard::output::{print_banner, print_json, print_penalty_warning};
use wattle_guard::utils::progress::{create_spinner, print_fail, print_pass, print_warning};
use wattle_guard::{AuditEvent, Auditor, RiskLevel};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Install the ring crypto provider for rustls
    let _ = rustls::crypto::ring::default_provider().install_default();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let settings = load_settings(cli.config.as_ref()).context("Failed to load settings")?;

    let target = if cli.needs_prompt() {
        read_target().context("Failed to read target")?
    } else {
        cli.target.clone().unwrap_or_default()
    };

    let auditor = Auditor::from_settings(&settings)?;

    print_banner(&target);

    let spinner: RefCell<Option<ProgressBar>> = RefCell::new(None);
    let on_event = |event: AuditEvent| handle_event(&spinner, event);

    let report = auditor.run(&target, &on_event).await;

    if let Some(bar) = spinner.borrow_mut().take() {
        bar.finish_and_clear();
    }

    print_json(&report)?;
    print_penalty_warning(&report, &settings.report);

    Ok(())
}

fn handle_event(spinner: &RefCell<Option<ProgressBar>>, event: AuditEvent) {
    let mut current = spinner.borrow_mut();

    match event {
        AuditEvent::LocationStarted { target } => {
            *current = Some(create_spinner(&format!("Locating {}...", target)));
        }
        AuditEvent::LocationComplete(geo) => {
            if let Some(bar) = current.take() {
                bar.finish_and_clear();
            }
            match geo.location() {
                Some(location) => print_pass(&format!("Hosted at {}", location)),
                None => print_fail(&format!(
                    "Location unknown: {}",
                    geo.error().unwrap_or("lookup failed")
                )),
            }
        }
        AuditEvent::TransportStarted { target } => {
            *current = Some(create_spinner(&format!(
                "Inspecting TLS transport of {}...",
                target
            )));
        }
        AuditEvent::TransportComplete(security) => {
            if let Some(bar) = current.take() {
                bar.finish_and_clear();
            }
            match security.cipher() {
                Some(cipher) => print_pass(&format!("Encrypted in transit: {}", cipher)),
                None if security.tls_valid() => print_pass("Encrypted in transit"),
                None => print_fail(&security.note().unwrap_or_default()),
            }
        }
        AuditEvent::RiskComplete { level } => match level {
            RiskLevel::Low => print_pass(&format!("Jurisdiction risk: {}", level)),
            RiskLevel::High => print_fail(&format!("Jurisdiction risk: {}", level)),
            _ => print_warning(&format!("Jurisdiction risk: {}", level)),
        },
    }
}
