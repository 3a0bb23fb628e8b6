use std::io::BufRead;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::error::ReportError;
use crate::patterns::PatternMatcher;
use crate::source::{log_lines, open_log, LogLines};

/// A line that satisfied a filter, trimmed, with the text of its capture groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub line: String,
    pub captures: Vec<String>,
}

/// A compiled search pattern applied line by line.
#[derive(Debug, Clone)]
pub struct LineFilter {
    pattern: String,
    regex: Regex,
    ignore_case: bool,
}

impl LineFilter {
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, ReportError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()?;
        Ok(LineFilter {
            pattern: pattern.to_string(),
            regex,
            ignore_case,
        })
    }

    /// Capture group texts of every match in `line`; empty for group-less patterns.
    fn captures(&self, line: &str) -> Vec<String> {
        self.regex
            .captures_iter(line)
            .flat_map(|caps| {
                caps.iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().to_string())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn scan<R: BufRead>(&self, reader: R) -> Result<FilterResult, ReportError> {
        self.scan_lines(log_lines(reader))
    }

    fn scan_lines<R: BufRead>(&self, lines: LogLines<R>) -> Result<FilterResult, ReportError> {
        let mut records = Vec::new();
        for line_result in lines {
            let line = line_result?;
            if self.matches(&line) {
                let trimmed = line.trim();
                records.push(MatchRecord {
                    line: trimmed.to_string(),
                    captures: self.captures(trimmed),
                });
            }
        }
        debug!(pattern = %self.pattern, matches = records.len(), "filter scan complete");
        Ok(FilterResult {
            pattern: self.pattern.clone(),
            ignore_case: self.ignore_case,
            records,
        })
    }

    pub fn scan_file(&self, path: &Path) -> Result<FilterResult, ReportError> {
        self.scan_lines(open_log(path)?)
    }
}

impl PatternMatcher for LineFilter {
    fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Outcome of one filter scan.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResult {
    pub pattern: String,
    pub ignore_case: bool,
    pub records: Vec<MatchRecord>,
}

impl FilterResult {
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.line.as_str())
    }

    pub fn summary(&self) -> String {
        let sensitivity = if self.ignore_case {
            "case-insensitive"
        } else {
            "case-sensitive"
        };
        format!(
            "The log file contains {} records that {} match the regex \"{}\".",
            self.count(),
            sensitivity,
            self.pattern
        )
    }

    pub fn print(&self, print_records: bool, print_summary: bool) {
        if print_records {
            for line in self.lines() {
                println!("{}", line);
            }
        }
        if print_summary {
            println!("{}", self.summary());
        }
    }
}

/// Runs `pattern` over the log at `path`.
pub fn filter_log(path: &Path, pattern: &str, ignore_case: bool) -> Result<FilterResult, ReportError> {
    LineFilter::new(pattern, ignore_case)?.scan_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LOG: &str = "\
Jan 2 03:04:05 host sshd[1]: Invalid user bob from 10.0.0.5 port 222
Jan 2 03:04:06 host kernel: SRC=1.2.3.4 DST=5.6.7.8 SPT=11 DPT=22
Jan 2 03:04:07 host sshd[2]: pam_unix(sshd:auth): authentication failure
  Jan 2 03:04:08 host SSHD[3]: error: Could not get shadow information
";

    #[test]
    fn test_case_insensitive_count_and_order() {
        let result = LineFilter::new("sshd", true).unwrap().scan(Cursor::new(LOG)).unwrap();
        assert_eq!(result.count(), 3);
        let lines: Vec<&str> = result.lines().collect();
        assert!(lines[0].contains("sshd[1]"));
        assert!(lines[1].contains("sshd[2]"));
        assert_eq!(lines[2], "Jan 2 03:04:08 host SSHD[3]: error: Could not get shadow information");
    }

    #[test]
    fn test_case_sensitive() {
        let result = LineFilter::new("sshd", false).unwrap().scan(Cursor::new(LOG)).unwrap();
        assert_eq!(result.count(), 2);
    }

    #[test]
    fn test_captures() {
        let filter = LineFilter::new(r"invalid user (\S+) from (\S+)", true).unwrap();
        let result = filter.scan(Cursor::new(LOG)).unwrap();
        assert_eq!(result.records[0].captures, vec!["bob", "10.0.0.5"]);

        let result = LineFilter::new("pam", true).unwrap().scan(Cursor::new(LOG)).unwrap();
        assert_eq!(result.count(), 1);
        assert!(result.records[0].captures.is_empty());

        let result = LineFilter::new(r"(\w+)=\d+", false).unwrap().scan(Cursor::new(LOG)).unwrap();
        assert_eq!(result.records[0].captures, vec!["SRC", "DST", "SPT", "DPT"]);
    }

    #[test]
    fn test_summary_text() {
        let result = LineFilter::new("error", true).unwrap().scan(Cursor::new(LOG)).unwrap();
        assert_eq!(
            result.summary(),
            "The log file contains 1 records that case-insensitive match the regex \"error\"."
        );
        let result = LineFilter::new("error", false).unwrap().scan(Cursor::new("")).unwrap();
        assert_eq!(
            result.summary(),
            "The log file contains 0 records that case-sensitive match the regex \"error\"."
        );
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(LineFilter::new("invalid user (", true), Err(ReportError::Pattern(_))));
    }
}
