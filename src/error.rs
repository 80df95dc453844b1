use std::io;
use std::path::PathBuf;

/// Failures that abort an extraction run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Markdown input missing or not valid UTF-8
    #[error("Failed to read markdown file {}: {}", .path.display(), .source)]
    ReadInput { path: PathBuf, source: io::Error },

    /// Output directory could not be created
    #[error("Failed to create output directory {}: {}", .path.display(), .source)]
    CreateOutputDir { path: PathBuf, source: io::Error },

    /// A block file or the Makefile could not be written
    #[error("Failed to write {}: {}", .path.display(), .source)]
    WriteFile { path: PathBuf, source: io::Error },

    /// Configured name limit leaves no room for the `_block_<nn>` suffix
    #[error("Maximum file name length {limit} is too short, block names need at least {required} characters")]
    NameLimitTooShort { limit: usize, required: usize },

    #[error("Failed to read config file {}: {}", .path.display(), .source)]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("Invalid config file {}: {}", .path.display(), .source)]
    ParseConfig {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
