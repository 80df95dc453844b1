use regex::Regex;
use std::sync::OnceLock;

fn unsafe_chars_regex() -> &'static Regex {
    static UNSAFE_CHARS_REGEX: OnceLock<Regex> = OnceLock::new();
    UNSAFE_CHARS_REGEX.get_or_init(|| {
        Regex::new(r#"[/\\?%*:|"<>\x7F\x00-\x1F]"#).expect("Invalid filename sanitizer regex")
    })
}

/// Replace characters that are unsafe in file names with `-`.
pub fn sanitize(name: &str) -> String {
    unsafe_chars_regex().replace_all(name, "-").into_owned()
}

/// Digits needed for block indices, with one digit of headroom past `total`.
pub fn pad_width(total: usize) -> usize {
    (total + 1).to_string().len()
}

/// `code_block_<index>`
pub fn simple_file_stem(index: usize) -> String {
    format!("code_block_{}", index)
}

/// Characters taken by the `_block_<padded index>` suffix for `total` blocks.
pub fn block_suffix_len(total: usize) -> usize {
    "_block_".len() + pad_width(total)
}

/// `<sanitized heading>_block_<padded index>`, at most `max_len` characters.
///
/// Only the heading is truncated; the index suffix always survives so
/// stems stay unique within a run. `None` when `max_len` cannot hold the suffix.
pub fn heading_file_stem(
    heading: &str,
    index: usize,
    total: usize,
    max_len: usize,
) -> Option<String> {
    let suffix = format!("_block_{:0width$}", index, width = pad_width(total));
    let budget = max_len.checked_sub(suffix.chars().count())?;
    let mut stem: String = sanitize(heading).chars().take(budget).collect();
    stem.push_str(&suffix);
    Some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_unsafe() {
        assert_eq!(sanitize("a/b:c"), "a-b-c");
        assert_eq!(sanitize(r#"why?100%*|"<x>"\"#), "why-100-----x---");
        assert_eq!(sanitize("tab\there\u{7f}"), "tab-here-");
        assert_eq!(sanitize("keep_me.ok-1"), "keep_me.ok-1");
    }

    #[test]
    fn test_pad_width() {
        assert_eq!(pad_width(0), 1);
        assert_eq!(pad_width(8), 1);
        assert_eq!(pad_width(9), 2);
        assert_eq!(pad_width(98), 2);
        assert_eq!(pad_width(99), 3);
    }

    #[test]
    fn test_simple_stem() {
        assert_eq!(simple_file_stem(7), "code_block_7");
    }

    #[test]
    fn test_block_suffix_len() {
        assert_eq!(block_suffix_len(1), "_block_1".len());
        assert_eq!(block_suffix_len(12), "_block_01".len());
    }

    fn stem(heading: &str, index: usize, total: usize, max_len: usize) -> String {
        heading_file_stem(heading, index, total, max_len).expect("limit fits suffix")
    }

    #[test]
    fn test_heading_stem_padding() {
        assert_eq!(stem("intro", 1, 2, 50), "intro_block_1");
        assert_eq!(stem("intro", 3, 12, 50), "intro_block_03");
    }

    #[test]
    fn test_heading_stem_sanitized() {
        assert_eq!(
            stem("client/server:_setup", 1, 1, 50),
            "client-server-_setup_block_1"
        );
    }

    #[test]
    fn test_heading_stem_truncated() {
        let heading = "x".repeat(120);
        let truncated = stem(&heading, 5, 20, 50);
        assert_eq!(truncated.chars().count(), 50);
        assert!(truncated.ends_with("_block_05"));
        assert!(truncated.starts_with(&"x".repeat(41)));
    }

    #[test]
    fn test_heading_stem_truncates_by_chars() {
        let heading = "é".repeat(60);
        let truncated = stem(&heading, 1, 1, 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with("_block_1"));
    }

    #[test]
    fn test_limit_exactly_suffix_drops_heading() {
        assert_eq!(stem("intro", 1, 1, 8), "_block_1");
    }

    #[test]
    fn test_limit_shorter_than_suffix_rejected() {
        assert_eq!(heading_file_stem("intro", 1, 1, 7), None);
        assert_eq!(heading_file_stem("intro", 1, 1, 3), None);
    }
}
