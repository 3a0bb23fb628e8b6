use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Leading syslog stamp: "Jan 2 03:04:05" (day may be space padded)
    static ref SYSLOG_TIMESTAMP: Regex = Regex::new(r"^\w+\s+\d+\s+\d+:\d+:\d+").unwrap();
}

/// The leading `<month> <day> <hh:mm:ss>` stamp of a syslog line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyslogTimestamp<'a> {
    raw: &'a str,
}

impl<'a> SyslogTimestamp<'a> {
    /// First whitespace-separated token of the stamp (the month word).
    pub fn date(&self) -> &'a str {
        self.raw.split_whitespace().next().unwrap_or_default()
    }

    /// Second whitespace-separated token of the stamp (the day number).
    pub fn time(&self) -> &'a str {
        self.raw.split_whitespace().nth(1).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }
}

pub fn extract_timestamp(line: &str) -> Option<SyslogTimestamp<'_>> {
    SYSLOG_TIMESTAMP
        .find(line)
        .map(|m| SyslogTimestamp { raw: m.as_str() })
}
