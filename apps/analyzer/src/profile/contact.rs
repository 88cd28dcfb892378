//! Contact and header fields pulled from free-form resume text.
//! Every extractor returns the first match, or `None`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:full name|name)[:\s]*([^\n]+)").expect("valid name regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid phone regex")
});
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:location|address|based in|city)[:\s]*([^\n,;]+)")
        .expect("valid location regex")
});
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:summary|about|profile)[:\s]*([^\n]+)").expect("valid summary regex")
});
static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/[a-zA-Z0-9-]+|linkedin:[ \t]*[^\n]+")
        .expect("valid linkedin regex")
});
static GITHUB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)github\.com/[a-zA-Z0-9-]+|github:[ \t]*[^\n]+").expect("valid github regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        name: capture_trimmed(&NAME_RE, text),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().trim().to_string()),
        location: capture_trimmed(&LOCATION_RE, text),
        linkedin: profile_url(&LINKEDIN_RE, text, "linkedin.com/", "linkedin.com/in/"),
        github: profile_url(&GITHUB_RE, text, "github.com/", "github.com/"),
    }
}

pub fn extract_summary(text: &str) -> Option<String> {
    capture_trimmed(&SUMMARY_RE, text)
}

fn capture_trimmed(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Normalises either a bare `host/path` or a `label: value` match into an https URL.
fn profile_url(re: &Regex, text: &str, host: &str, handle_prefix: &str) -> Option<String> {
    let matched = re.find(text)?.as_str();
    let lower = matched.to_ascii_lowercase();

    if let Some(idx) = lower.find(host) {
        let path = matched[idx..].split_whitespace().next().unwrap_or_default();
        return Some(format!("https://{path}"));
    }

    let handle = matched
        .split_once(':')
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())?;
    if handle.starts_with("http") {
        return Some(handle.to_string());
    }
    Some(format!("https://{handle_prefix}{}", handle.trim_start_matches('@')))
}
