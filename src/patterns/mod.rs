pub mod firewall;
pub mod ip;
pub mod sshd;
pub mod timestamp;

/// Decides whether a raw log line belongs to a selection.
pub trait PatternMatcher {
    fn matches(&self, line: &str) -> bool;
}

/// Matches lines containing the literal `KEY=VALUE` text anywhere.
pub struct MarkerMatcher {
    needle: String,
}

impl MarkerMatcher {
    pub fn new(key: &str, value: &str) -> Self {
        MarkerMatcher {
            needle: format!("{}={}", key, value),
        }
    }
}

impl PatternMatcher for MarkerMatcher {
    fn matches(&self, line: &str) -> bool {
        line.contains(&self.needle)
    }
}

/// Case-insensitive substring match.
pub struct ContainsIgnoreCase {
    needle: String,
}

impl ContainsIgnoreCase {
    pub fn new(needle: &str) -> Self {
        ContainsIgnoreCase {
            needle: needle.to_lowercase(),
        }
    }
}

impl PatternMatcher for ContainsIgnoreCase {
    fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_substring_match() {
        let dpt22 = MarkerMatcher::new("DPT", "22");
        assert!(dpt22.matches("SRC=1.2.3.4 SPT=11 DPT=22 WINDOW=512"));
        assert!(dpt22.matches("SRC=1.2.3.4 SPT=11 DPT=22,"));
        assert!(dpt22.matches("SRC=1.2.3.4 SPT=11 DPT=2222 WINDOW=512"));
        assert!(!dpt22.matches("SRC=1.2.3.4 SPT=22 WINDOW=512"));
        assert!(!dpt22.matches("SRC=1.2.3.4 SPT=11 dpt=22"));
    }

    #[test]
    fn test_marker_source_address() {
        let src = MarkerMatcher::new("SRC", "220.195.35.40");
        assert!(src.matches("IN=eth0 SRC=220.195.35.40 DST=11.11.79.67"));
        assert!(!src.matches("IN=eth0 SRC=220.195.35.4 DST=11.11.79.67"));
        assert!(!src.matches("sshd[9]: Invalid user guest from 220.195.35.40"));
    }

    #[test]
    fn test_contains_ignore_case() {
        let matcher = ContainsIgnoreCase::new("Invalid User");
        assert!(matcher.matches("sshd[1]: invalid user bob from 10.0.0.5"));
        assert!(matcher.matches("sshd[1]: INVALID USER bob from 10.0.0.5"));
        assert!(!matcher.matches("sshd[1]: Accepted password for bob"));
    }
}
