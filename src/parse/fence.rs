use crate::types::PLAIN_LANGUAGE;
use regex::Regex;
use std::sync::OnceLock;

/// A fenced block located in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    pub start: usize,
    pub end: usize,
    pub language: String,
    pub content: String,
}

fn fence_regex() -> &'static Regex {
    static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    FENCE_REGEX.get_or_init(|| {
        // Opening fence at line start, rest of the line is the tag,
        // body runs lazily (across blank lines) to the next line-initial fence.
        Regex::new(r"(?ms)^```([^\n]*)\n(.*?)^```").expect("Invalid code fence regex")
    })
}

/// Scan `text` for fenced code blocks in document order.
pub fn scan_fences(text: &str) -> impl Iterator<Item = Fence> + '_ {
    fence_regex().captures_iter(text).map(|caps| {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let tag = caps.get(1).map_or("", |m| m.as_str()).trim().to_lowercase();
        let content = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
        Fence {
            start: whole.start,
            end: whole.end,
            language: if tag.is_empty() {
                PLAIN_LANGUAGE.to_string()
            } else {
                tag
            },
            content,
        }
    })
}
