//! Extract fenced code blocks from a markdown document into one file per block.
//!
//! The pipeline is two steps: [`parse::extract_blocks`] turns text into an
//! ordered list of [`ExtractedBlock`]s, and [`materialize::materialize`]
//! writes them under an output directory.

pub mod config;
pub mod error;
pub mod lang;
pub mod materialize;
pub mod naming;
pub mod parse;
pub mod types;

pub use error::{Error, Result};
pub use lang::ExtensionTable;
pub use types::{ExtractedBlock, NamingScheme, Options, WrittenBlock};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Read `input`, extract its code blocks, and write them to `output_dir`.
pub fn extract_file(
    input: &Path,
    output_dir: &Path,
    extensions: &ExtensionTable,
    options: &Options,
) -> Result<Vec<WrittenBlock>> {
    let markdown = fs::read_to_string(input).map_err(|source| Error::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("Read markdown file {} ({} bytes)", input.display(), markdown.len());

    let blocks = parse::extract_blocks(&markdown, options);
    materialize::materialize(&blocks, output_dir, extensions, options)
}
