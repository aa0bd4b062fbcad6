use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

fn default_title() -> String {
    "Songbook".to_string()
}

/// Songbook declaration file contents.
///
/// ```json
/// {
///     "title": "Camp Songs",
///     "prefix": "songs",
///     "songs": ["habits.txt", "lonely.txt"]
/// }
/// ```
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SongbookDeclaration {
    /// Book title, shown on the first page.
    #[serde(default = "default_title")]
    pub title: String,
    /// Directory song references are resolved against. Relative prefixes
    /// are resolved against the declaration file's directory.
    #[serde(default)]
    pub prefix: Option<PathBuf>,
    /// Song file references, in book order.
    #[serde(default)]
    pub songs: Vec<String>,
}

impl SongbookDeclaration {
    /// Parse a declaration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let declaration: Self = serde_json::from_str(json)?;
        if declaration.songs.iter().any(|song| song.trim().is_empty()) {
            return Err(Error::InvalidDeclaration(
                "song references must not be empty".to_string(),
            ));
        }
        Ok(declaration)
    }

    /// Read and parse a declaration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Base path for song references, given the directory holding the
    /// declaration.
    pub fn base_path(&self, declaration_dir: &Path) -> PathBuf {
        match &self.prefix {
            Some(prefix) => declaration_dir.join(prefix),
            None => declaration_dir.to_path_buf(),
        }
    }
}
