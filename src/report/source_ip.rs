use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::ReportSummary;
use crate::error::ReportError;
use crate::patterns::{ip, MarkerMatcher, PatternMatcher};
use crate::source::open_log;

pub fn source_ip_log_path(output_dir: &Path, address: &str) -> PathBuf {
    output_dir.join(format!("source_ip_{}.log", ip::file_stem(address)))
}

/// Copies every line containing `SRC=<address>`, trimmed and in order, to
/// `source_ip_<address>.log`. The file is created even with no matches.
pub fn generate_source_ip_log(
    log: &Path,
    address: &str,
    output_dir: &Path,
) -> Result<ReportSummary, ReportError> {
    let selector = MarkerMatcher::new("SRC", address);
    let lines = open_log(log)?;
    let output = source_ip_log_path(output_dir, address);
    let mut writer = BufWriter::new(File::create(&output)?);
    let mut rows = 0;

    for line_result in lines {
        let line = line_result?;
        if selector.matches(&line) {
            writeln!(writer, "{}", line.trim())?;
            rows += 1;
        }
    }
    writer.flush()?;

    info!(path = %output.display(), rows, "source IP log written");
    Ok(ReportSummary {
        path: output,
        rows,
        skipped: 0,
    })
}
