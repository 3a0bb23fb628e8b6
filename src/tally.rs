use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::ReportError;
use crate::patterns::firewall;
use crate::source::{log_lines, open_log, LogLines};

/// Occurrences of each destination port, ordered by port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PortTally(BTreeMap<u16, usize>);

impl PortTally {
    pub fn record(&mut self, port: u16) {
        *self.0.entry(port).or_insert(0) += 1;
    }

    pub fn count(&self, port: u16) -> usize {
        self.0.get(&port).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, usize)> + '_ {
        self.0.iter().map(|(&port, &count)| (port, count))
    }

    /// Ports seen at least `threshold` times.
    pub fn busy_ports(&self, threshold: usize) -> Vec<u16> {
        self.iter()
            .filter(|&(_, count)| count >= threshold)
            .map(|(port, _)| port)
            .collect()
    }
}

pub fn tally_port_traffic<R: BufRead>(reader: R) -> Result<PortTally, ReportError> {
    tally_lines(log_lines(reader))
}

fn tally_lines<R: BufRead>(lines: LogLines<R>) -> Result<PortTally, ReportError> {
    let mut tally = PortTally::default();
    for (index, line_result) in lines.enumerate() {
        let line = line_result?;
        let Some(digits) = firewall::extract_destination_port(&line) else {
            continue;
        };
        match digits.parse::<u16>() {
            Ok(port) => tally.record(port),
            Err(_) => debug!(line = index + 1, value = digits, "DPT value is not a port number"),
        }
    }
    Ok(tally)
}

pub fn tally_port_traffic_file(path: &Path) -> Result<PortTally, ReportError> {
    tally_lines(open_log(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_counts_each_occurrence() {
        let log = "\
a SRC=1.2.3.4 DPT=22
b SRC=1.2.3.4 DPT=80
c SRC=1.2.3.4 DPT=22 WINDOW=1
d sshd[1]: no marker here
";
        let tally = tally_port_traffic(Cursor::new(log)).unwrap();
        assert_eq!(tally.count(22), 2);
        assert_eq!(tally.count(80), 1);
        assert_eq!(tally.count(443), 0);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let log = "x DPT=53\ny DPT=53\nz DPT=123\n";
        let first = tally_port_traffic(Cursor::new(log)).unwrap();
        let second = tally_port_traffic(Cursor::new(log)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overflowing_port_ignored() {
        let tally = tally_port_traffic(Cursor::new("x DPT=99999\ny DPT=65535\n")).unwrap();
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.count(65535), 1);
    }

    #[test]
    fn test_busy_ports() {
        let mut tally = PortTally::default();
        for _ in 0..3 {
            tally.record(445);
        }
        tally.record(22);
        assert_eq!(tally.busy_ports(3), vec![445]);
        assert_eq!(tally.busy_ports(1), vec![22, 445]);
        assert!(tally.busy_ports(4).is_empty());
    }

    #[test]
    fn test_empty_source() {
        assert!(tally_port_traffic(Cursor::new("")).unwrap().is_empty());
    }
}
