use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Heading recorded for blocks that appear before any markdown heading.
pub const NO_HEADING: &str = "__no_heading__";

/// Tag used when the opening fence carries no language.
pub const PLAIN_LANGUAGE: &str = "plain";

/// Default cap on the file stem length (extension excluded).
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 50;

/// One fenced code block pulled out of a markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    /// Lowercased language tag, `plain` when the fence has none.
    pub language: String,
    /// Code between the fences, trimmed.
    pub content: String,
    /// Nearest preceding heading, lowercased with spaces as underscores.
    pub heading: String,
}

/// How output files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// `code_block_<n>.<ext>`, content written verbatim.
    Simple,
    /// `<heading>_block_<nn>.<ext>`, plus a Makefile template.
    #[default]
    Heading,
}

impl FromStr for NamingScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(NamingScheme::Simple),
            "heading" => Ok(NamingScheme::Heading),
            other => Err(format!(
                "unknown naming scheme '{}', expected 'simple' or 'heading'",
                other
            )),
        }
    }
}

/// Run options passed to both extraction and materialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub verbose: bool,
    pub scheme: NamingScheme,
    pub max_filename_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            verbose: false,
            scheme: NamingScheme::default(),
            max_filename_length: DEFAULT_MAX_FILENAME_LENGTH,
        }
    }
}

/// What the materializer wrote for a single block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenBlock {
    pub index: usize,
    pub language: String,
    pub path: PathBuf,
}
