use regex::Regex;
use std::sync::OnceLock;

/// A markdown ATX heading located in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub start: usize,
    pub text: String,
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX
        .get_or_init(|| Regex::new(r"(?m)^#+[ \t]+(.*)$").expect("Invalid heading regex"))
}

/// Trim, lowercase, and turn spaces into underscores.
///
/// Filesystem safety is handled later by [`crate::naming::sanitize`].
pub fn normalize_heading(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Scan `text` for headings of any depth, already normalized.
pub fn scan_headings(text: &str) -> impl Iterator<Item = Heading> + '_ {
    heading_regex().captures_iter(text).map(|caps| Heading {
        start: caps.get(0).map_or(0, |m| m.start()),
        text: normalize_heading(caps.get(1).map_or("", |m| m.as_str())),
    })
}
