use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{write_csv_report, ReportRow, ReportSummary};
use crate::error::{FieldError, ReportError};
use crate::patterns::{firewall, timestamp, MarkerMatcher};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortTrafficRow {
    pub date: String,
    pub time: String,
    pub source_ip: String,
    pub destination_ip: String,
    pub source_port: String,
    pub destination_port: String,
}

impl ReportRow for PortTrafficRow {
    const HEADER: &'static [&'static str] = &[
        "Date",
        "Time",
        "Source IP",
        "Destination IP",
        "Source Port",
        "Destination Port",
    ];

    fn from_line(line: &str) -> Result<Self, FieldError> {
        let stamp = timestamp::extract_timestamp(line).ok_or(FieldError::missing("timestamp"))?;
        let source_ip = firewall::extract_source_ip(line).ok_or(FieldError::missing("SRC"))?;
        let destination_ip = firewall::extract_destination_ip(line).ok_or(FieldError::missing("DST"))?;
        let source_port = firewall::extract_source_port(line).ok_or(FieldError::missing("SPT"))?;
        let destination_port = firewall::extract_destination_port(line).ok_or(FieldError::missing("DPT"))?;

        Ok(PortTrafficRow {
            date: stamp.date().to_string(),
            time: stamp.time().to_string(),
            source_ip: source_ip.to_string(),
            destination_ip: destination_ip.to_string(),
            source_port: source_port.to_string(),
            destination_port: destination_port.to_string(),
        })
    }
}

pub fn port_report_path(output_dir: &Path, port: u16) -> PathBuf {
    output_dir.join(format!("destination_port_{}_report.csv", port))
}

/// Writes `destination_port_<port>_report.csv` for every line containing `DPT=<port>`.
pub fn generate_port_traffic_report(
    log: &Path,
    port: u16,
    output_dir: &Path,
) -> Result<ReportSummary, ReportError> {
    let selector = MarkerMatcher::new("DPT", &port.to_string());
    write_csv_report::<PortTrafficRow>(log, &selector, port_report_path(output_dir, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_line() {
        let row = PortTrafficRow::from_line(
            "Jan 1 00:00:01 host kernel: IN=eth0 SRC=1.2.3.4 DST=5.6.7.8 LEN=40 SPT=11 DPT=22 WINDOW=1024",
        )
        .unwrap();
        assert_eq!(
            row,
            PortTrafficRow {
                date: "Jan".to_string(),
                time: "1".to_string(),
                source_ip: "1.2.3.4".to_string(),
                destination_ip: "5.6.7.8".to_string(),
                source_port: "11".to_string(),
                destination_port: "22".to_string(),
            }
        );
    }

    #[test]
    fn test_row_missing_fields() {
        assert_eq!(
            PortTrafficRow::from_line("Jan 1 00:00:01 host kernel: SRC=1.2.3.4 DST=5.6.7.8 DPT=22"),
            Err(FieldError::missing("SPT"))
        );
        assert_eq!(
            PortTrafficRow::from_line("kernel: SRC=1.2.3.4 DST=5.6.7.8 SPT=11 DPT=22"),
            Err(FieldError::missing("timestamp"))
        );
    }

    #[test]
    fn test_report_path() {
        assert_eq!(
            port_report_path(Path::new("out"), 445),
            Path::new("out").join("destination_port_445_report.csv")
        );
    }
}
