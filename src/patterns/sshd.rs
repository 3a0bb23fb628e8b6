use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Applied to the lower-cased line
    static ref INVALID_USER: Regex = Regex::new(r"invalid user (\S+)").unwrap();
    static ref FROM_HOST: Regex = Regex::new(r"from (\S+)").unwrap();
}

/// Username and origin of an sshd "Invalid user" line, both lower-cased.
/// Each field is `None` when its marker is absent.
pub fn extract_invalid_user(line: &str) -> (Option<String>, Option<String>) {
    let folded = line.to_lowercase();

    let username = INVALID_USER
        .captures(&folded)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    let host = FROM_HOST
        .captures(&folded)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    (username, host)
}
