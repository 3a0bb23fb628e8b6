pub mod invalid_user;
pub mod port;
pub mod source_ip;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{FieldError, ReportError};
use crate::patterns::PatternMatcher;
use crate::source::open_log;

pub use invalid_user::{generate_invalid_user_report, InvalidUserRow};
pub use port::{generate_port_traffic_report, PortTrafficRow};
pub use source_ip::generate_source_ip_log;

/// What a report generator wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub skipped: usize,
}

/// A CSV report row with a fixed column schema.
pub trait ReportRow: Serialize + Sized {
    const HEADER: &'static [&'static str];

    fn from_line(line: &str) -> Result<Self, FieldError>;
}

/// Scans `log`, builds a row from every line `selector` accepts and writes
/// the rows under `HEADER` to `output`. Lines missing a field are skipped.
pub(crate) fn write_csv_report<T: ReportRow>(
    log: &Path,
    selector: &dyn PatternMatcher,
    output: PathBuf,
) -> Result<ReportSummary, ReportError> {
    let lines = open_log(log)?;
    let mut rows = Vec::new();
    let mut skipped = 0;

    for (index, line_result) in lines.enumerate() {
        let line = line_result?;
        if !selector.matches(&line) {
            continue;
        }
        match T::from_line(&line) {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                warn!(line = index + 1, report = %output.display(), "skipping malformed line: {}", e);
            }
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&output)?;
    writer.write_record(T::HEADER)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(path = %output.display(), rows = rows.len(), skipped, "report written");
    Ok(ReportSummary {
        path: output,
        rows: rows.len(),
        skipped,
    })
}
