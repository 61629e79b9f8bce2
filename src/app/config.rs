use crate::app::error::{Result, ScanError};
use crate::app::models::ExclusionSet;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "excludes.toml";

/// Written by `scanmate init`.
pub const DEFAULT_CONFIG: &str = r#"# Names matched here are skipped by `scanmate scan`.
# Patterns are globs matched against bare folder and file names.
[exclude]
folders = [
    ".git",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    "target",
    "dist",
    "build",
    ".idea",
    ".vscode",
    ".mypy_cache",
    ".pytest_cache",
]
files = [
    ".gitignore",
    ".DS_Store",
    "*.pyc",
    "*.pyo",
    "*.lock",
    "*.log",
]
"#;

#[derive(Deserialize, Debug, Default)]
struct ConfigFile {
    #[serde(default)]
    exclude: ExcludeSection,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ExcludeSection {
    folders: Vec<String>,
    files: Vec<String>,
}

/// Reads the `[exclude]` table from `path`.
///
/// A missing file is not an error and yields an empty set, as do missing keys.
pub fn load_exclusions(path: &Path) -> Result<ExclusionSet> {
    if !path.exists() {
        log::debug!("No exclusion config at {}", path.display());
        return Ok(ExclusionSet::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ScanError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: ConfigFile = toml::from_str(&content).map_err(|source| ScanError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ExclusionSet {
        folders: parsed.exclude.folders,
        files: parsed.exclude.files,
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    fs::write(path, DEFAULT_CONFIG).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}
