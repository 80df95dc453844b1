use std::collections::HashMap;

/// Extension used for tags missing from the table
pub const FALLBACK_EXTENSION: &str = "txt";

/// Built-in language tag to file extension mapping
static LANGUAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("python", "py"),
    ("javascript", "js"),
    ("typescript", "ts"),
    ("java", "java"),
    ("c", "c"),
    ("cpp", "cpp"),
    ("cs", "cs"),
    ("html", "html"),
    ("css", "css"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("xml", "xml"),
    ("bash", "sh"),
    ("shell", "sh"),
    ("powershell", "ps1"),
    ("php", "php"),
    ("ruby", "rb"),
    ("swift", "swift"),
    ("go", "go"),
    ("r", "r"),
    ("perl", "pl"),
    ("kotlin", "kt"),
    ("rust", "rs"),
    ("dart", "dart"),
    ("lua", "lua"),
    ("makefile", "mk"),
];

/// Resolves language tags to extensions, user overrides first
#[derive(Debug, Clone, Default)]
pub struct ExtensionTable {
    overrides: HashMap<String, String>,
}

impl ExtensionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with extra tag mappings layered over the built-ins.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let overrides = overrides
            .iter()
            .map(|(tag, ext)| {
                (
                    tag.trim().to_lowercase(),
                    ext.trim().trim_start_matches('.').to_string(),
                )
            })
            .collect();
        ExtensionTable { overrides }
    }

    pub fn resolve(&self, tag: &str) -> &str {
        if let Some(ext) = self.overrides.get(tag) {
            return ext;
        }
        LANGUAGE_EXTENSIONS
            .iter()
            .find(|(known, _)| *known == tag)
            .map_or(FALLBACK_EXTENSION, |&(_, ext)| ext)
    }
}
