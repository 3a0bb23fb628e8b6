use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::ReporterConfig;
use crate::error::ReportError;
use crate::filter::filter_log;
use crate::report::{
    generate_invalid_user_report, generate_port_traffic_report, generate_source_ip_log,
    ReportSummary,
};
use crate::tally::{tally_port_traffic_file, PortTally};

/// One console diagnostic: a heading and the filter printed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Investigation {
    pub heading: String,
    pub pattern: String,
    pub ignore_case: bool,
}

impl Investigation {
    fn new(heading: &str, pattern: String, ignore_case: bool) -> Self {
        Investigation {
            heading: heading.to_string(),
            pattern,
            ignore_case,
        }
    }
}

/// The built-in diagnostics followed by any extra patterns from `config`.
pub fn investigations(config: &ReporterConfig) -> Vec<Investigation> {
    let mut list = vec![
        Investigation::new(
            "Investigating the Gateway Firewall Log for SSHD entries...",
            "sshd".to_string(),
            true,
        ),
        Investigation::new(
            "Investigating for invalid user attempts...",
            "invalid user".to_string(),
            true,
        ),
        Investigation::new(
            "Checking if all invalid user attempts are from the same IP...",
            format!("invalid user.*{}", config.source_ip),
            true,
        ),
        Investigation::new(
            "Looking for any error messages in the log...",
            "error".to_string(),
            true,
        ),
        Investigation::new(
            "Investigating PAM authentication failures...",
            "pam".to_string(),
            true,
        ),
    ];

    for pattern in &config.extra_patterns {
        list.push(Investigation::new(
            "Applying custom filter...",
            pattern.clone(),
            !config.extra_case_sensitive,
        ));
    }
    list
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCount {
    pub pattern: String,
    pub ignore_case: bool,
    pub matches: usize,
}

/// Everything a run produced, in the order it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub log_path: PathBuf,
    pub filters: Vec<FilterCount>,
    pub port_tally: PortTally,
    pub port_reports: Vec<ReportSummary>,
    pub invalid_user_report: ReportSummary,
    pub source_ip_log: ReportSummary,
}

impl RunSummary {
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn announce(summary: &ReportSummary) {
    println!("Wrote {} rows to {}", summary.rows, summary.path.display());
    if summary.skipped > 0 {
        println!("Skipped {} malformed lines", summary.skipped);
    }
}

/// Prints the console diagnostics, then writes every report into
/// `config.output_dir`. Each step rescans the log from the start.
pub fn run(config: &ReporterConfig) -> Result<RunSummary, ReportError> {
    config.validate()?;
    fs::create_dir_all(&config.output_dir)?;
    info!(log = %config.log_path.display(), output = %config.output_dir.display(), "starting run");

    let mut filters = Vec::new();
    for (index, investigation) in investigations(config).iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", investigation.heading);
        let result = filter_log(&config.log_path, &investigation.pattern, investigation.ignore_case)?;
        result.print(config.print_records, config.print_summary);
        filters.push(FilterCount {
            pattern: investigation.pattern.clone(),
            ignore_case: investigation.ignore_case,
            matches: result.count(),
        });
    }

    println!("\nGenerating destination port traffic reports for high-traffic ports...");
    let port_tally = tally_port_traffic_file(&config.log_path)?;
    let mut port_reports = Vec::new();
    for port in port_tally.busy_ports(config.port_threshold) {
        let summary = generate_port_traffic_report(&config.log_path, port, &config.output_dir)?;
        announce(&summary);
        port_reports.push(summary);
    }

    println!("\nGenerating invalid user report...");
    let invalid_user_report = generate_invalid_user_report(&config.log_path, &config.output_dir)?;
    announce(&invalid_user_report);

    println!("\nGenerating log for source IP {}...", config.source_ip);
    let source_ip_log = generate_source_ip_log(&config.log_path, &config.source_ip, &config.output_dir)?;
    announce(&source_ip_log);

    Ok(RunSummary {
        log_path: config.log_path.clone(),
        filters,
        port_tally,
        port_reports,
        invalid_user_report,
        source_ip_log,
    })
}
