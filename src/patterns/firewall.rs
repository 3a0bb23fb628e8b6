use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // netfilter LOG target fields
    static ref SRC_PATTERN: Regex = Regex::new(r"SRC=(\S+)").unwrap();
    static ref DST_PATTERN: Regex = Regex::new(r"DST=(\S+)").unwrap();
    static ref SPT_PATTERN: Regex = Regex::new(r"SPT=(\d+)").unwrap();
    static ref DPT_PATTERN: Regex = Regex::new(r"DPT=(\d+)").unwrap();
}

fn first_group<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn extract_source_ip(line: &str) -> Option<&str> {
    first_group(&SRC_PATTERN, line)
}

pub fn extract_destination_ip(line: &str) -> Option<&str> {
    first_group(&DST_PATTERN, line)
}

pub fn extract_source_port(line: &str) -> Option<&str> {
    first_group(&SPT_PATTERN, line)
}

pub fn extract_destination_port(line: &str) -> Option<&str> {
    first_group(&DPT_PATTERN, line)
}
