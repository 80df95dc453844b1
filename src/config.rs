use crate::error::{Error, Result};
use crate::types::NamingScheme;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names looked up in the current directory
pub const CONFIG_CANDIDATES: &[&str] = &["md2code.yml", "md2code.yaml"];

/// Optional YAML config (`md2code.yml` / `md2code.yaml`)
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Md2codeConfig {
    /// Output naming scheme, `heading` or `simple`.
    pub scheme: Option<NamingScheme>,
    /// Longest file stem allowed in the heading scheme.
    pub max_filename_length: Option<usize>,
    /// Extra or replacement language tag to extension mappings.
    pub extensions: HashMap<String, String>,
}

impl Md2codeConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text, path)
    }

    fn from_yaml(text: &str, path: &Path) -> Result<Self> {
        // An empty file deserializes as unit, not as an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load `explicit` if given, else the first config candidate found in `dir`.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<Md2codeConfig>> {
    let path: PathBuf = match explicit {
        Some(p) => p.to_path_buf(),
        None => match CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
        {
            Some(p) => p,
            None => return Ok(None),
        },
    };
    let config = Md2codeConfig::from_file(&path)?;
    debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}
