pub mod fence;
pub mod heading;

use crate::types::{ExtractedBlock, Options, NO_HEADING};
use fence::{scan_fences, Fence};
use heading::{scan_headings, Heading};
use std::collections::BTreeSet;
use tracing::debug;

/// Headings and fences merged into document order
enum Event {
    Heading(Heading),
    Block(Fence),
}

impl Event {
    fn start(&self) -> usize {
        match self {
            Event::Heading(h) => h.start,
            Event::Block(f) => f.start,
        }
    }
}

/// Extract every fenced code block, tagging each with the nearest heading above it.
///
/// Heading-like lines inside a fenced block (shell comments, etc.) are not
/// headings and leave the current heading untouched, so a `# comment` in a
/// bash block never renames the blocks that follow it.
pub fn extract_blocks(text: &str, options: &Options) -> Vec<ExtractedBlock> {
    let mut events: Vec<Event> = scan_headings(text)
        .map(Event::Heading)
        .chain(scan_fences(text).map(Event::Block))
        .collect();
    events.sort_by_key(Event::start);

    let mut current_heading = NO_HEADING.to_string();
    let mut fence_end = 0;
    let mut blocks = Vec::new();

    for event in events {
        match event {
            Event::Heading(h) => {
                if h.start < fence_end {
                    continue;
                }
                debug!("Heading at byte {}: {}", h.start, h.text);
                current_heading = h.text;
            }
            Event::Block(f) => {
                fence_end = f.end;
                blocks.push(ExtractedBlock {
                    language: f.language,
                    content: f.content,
                    heading: current_heading.clone(),
                });
            }
        }
    }

    if options.verbose {
        let languages: BTreeSet<&str> = blocks.iter().map(|b| b.language.as_str()).collect();
        let languages: Vec<&str> = languages.into_iter().collect();
        println!(
            "Found {} code blocks of file types [{}]",
            blocks.len(),
            languages.join(", ")
        );
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<ExtractedBlock> {
        extract_blocks(text, &Options::default())
    }

    #[test]
    fn test_heading_association() {
        let text = "# Intro\n``` py\nprint(1)\n```\n## Setup\n``` sh\necho hi\n```";
        let blocks = extract(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].heading, "intro");
        assert_eq!(blocks[0].language, "py");
        assert_eq!(blocks[0].content, "print(1)");
        assert_eq!(blocks[1].heading, "setup");
        assert_eq!(blocks[1].language, "sh");
        assert_eq!(blocks[1].content, "echo hi");
    }

    #[test]
    fn test_no_heading_sentinel() {
        let blocks = extract("```c\nint x;\n```\n# Later\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].heading, NO_HEADING);
    }

    #[test]
    fn test_heading_persists_across_blocks() {
        let text = "### Deep One\n```\na\n```\n\n```\nb\n```\n# Top\n```\nc\n```\n";
        let headings: Vec<String> = extract(text).into_iter().map(|b| b.heading).collect();
        assert_eq!(headings, vec!["deep_one", "deep_one", "top"]);
    }

    #[test]
    fn test_comment_inside_block_is_not_heading() {
        let text = "# Install\n```bash\n# update first\napt update\n```\n```bash\nls\n```\n";
        let blocks = extract(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "# update first\napt update");
        assert_eq!(blocks[1].heading, "install");
    }

    #[test]
    fn test_no_blocks() {
        assert!(extract("# Title\n\nJust prose.\n").is_empty());
    }

    #[test]
    fn test_document_order() {
        let text = "```rust\n1\n```\n```python\n2\n```\n```\n3\n```\n";
        let blocks = extract(text);
        let contents: Vec<&str> = blocks.iter().map(|b| b.content.as_str()).collect();
        assert_eq!(contents, vec!["1", "2", "3"]);
        assert_eq!(blocks[2].language, "plain");
    }
}
