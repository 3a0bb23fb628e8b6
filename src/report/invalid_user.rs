use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{write_csv_report, ReportRow, ReportSummary};
use crate::error::{FieldError, ReportError};
use crate::patterns::{sshd, timestamp, ContainsIgnoreCase};

pub const INVALID_USERS_FILE: &str = "invalid_users.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidUserRow {
    pub date: String,
    pub time: String,
    pub username: String,
    pub ip_address: String,
}

impl ReportRow for InvalidUserRow {
    const HEADER: &'static [&'static str] = &["Date", "Time", "Username", "IP Address"];

    fn from_line(line: &str) -> Result<Self, FieldError> {
        let stamp = timestamp::extract_timestamp(line).ok_or(FieldError::missing("timestamp"))?;
        let (username, host) = sshd::extract_invalid_user(line);

        Ok(InvalidUserRow {
            date: stamp.date().to_string(),
            time: stamp.time().to_string(),
            username: username.ok_or(FieldError::missing("username"))?,
            ip_address: host.ok_or(FieldError::missing("from"))?,
        })
    }
}

pub fn invalid_user_report_path(output_dir: &Path) -> PathBuf {
    output_dir.join(INVALID_USERS_FILE)
}

/// Writes `invalid_users.csv` from every "invalid user" line.
pub fn generate_invalid_user_report(log: &Path, output_dir: &Path) -> Result<ReportSummary, ReportError> {
    let selector = ContainsIgnoreCase::new("invalid user");
    write_csv_report::<InvalidUserRow>(log, &selector, invalid_user_report_path(output_dir))
}
