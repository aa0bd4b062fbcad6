use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::export::synthesize_html;
use crate::ir::SongDocument;
use crate::parse::parse_song;
use crate::transform::{Metadata, transform_song};
use crate::util::decode_text;

/// One song: its source path, annotated document and metadata.
#[derive(Debug, Clone)]
pub struct Song {
    path: PathBuf,
    document: SongDocument,
    metadata: Metadata,
}

impl Song {
    /// Read, parse and annotate a song file.
    ///
    /// A file that does not exist or cannot be read yields
    /// [`Error::MissingSongFile`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::MissingSongFile {
            path: path.to_path_buf(),
            source,
        })?;
        let text = decode_text(&bytes);
        Ok(Self::from_source(path, &text))
    }

    /// Parse and annotate song text that is already in memory.
    pub fn from_source(path: impl Into<PathBuf>, text: &str) -> Self {
        let mut parsed = parse_song(text);
        let metadata = transform_song(&mut parsed.document, &parsed.meta);
        Self {
            path: path.into(),
            document: parsed.document,
            metadata,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn document(&self) -> &SongDocument {
        &self.document
    }

    /// Title from metadata, falling back to the file stem.
    pub fn display_title(&self) -> String {
        self.metadata.title.clone().unwrap_or_else(|| {
            self.path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    /// HTML markup of the annotated song.
    pub fn markup(&self) -> String {
        synthesize_html(&self.document)
    }
}
