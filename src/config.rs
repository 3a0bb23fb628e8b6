use std::path::PathBuf;

use crate::error::ReportError;
use crate::patterns::ip;

/// Ports seen at least this often get their own traffic report.
pub const DEFAULT_PORT_THRESHOLD: usize = 100;

/// Address followed by the source-IP log and the "same attacker" check.
pub const DEFAULT_SOURCE_IP: &str = "220.195.35.40";

/// Everything one reporting run needs.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    pub log_path: PathBuf,
    pub output_dir: PathBuf,
    pub port_threshold: usize,
    pub source_ip: String,
    /// Extra diagnostic filters run after the built-in ones.
    pub extra_patterns: Vec<String>,
    pub extra_case_sensitive: bool,
    pub print_records: bool,
    pub print_summary: bool,
}

impl ReporterConfig {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        ReporterConfig {
            log_path: log_path.into(),
            output_dir: PathBuf::from("."),
            port_threshold: DEFAULT_PORT_THRESHOLD,
            source_ip: DEFAULT_SOURCE_IP.to_string(),
            extra_patterns: Vec::new(),
            extra_case_sensitive: false,
            print_records: true,
            print_summary: true,
        }
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.log_path.is_file() {
            return Err(ReportError::InputNotFound {
                path: self.log_path.clone(),
            });
        }
        if !ip::is_match(&self.source_ip) {
            return Err(ReportError::InvalidSourceIp(self.source_ip.clone()));
        }
        Ok(())
    }
}
