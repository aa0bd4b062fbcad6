//! Songbooks: declared lists of songs composed into one printable document.
//!
//! Loading is sequential and in declaration order. A song that cannot be
//! read is reported and skipped; the rest of the book still loads.

mod compose;
mod declaration;
mod song;

pub use compose::compose;
pub use declaration::SongbookDeclaration;
pub use song::Song;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::export::{Renderer, Stylesheet};

/// Outcome of loading one declared song.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded {
        reference: String,
        path: PathBuf,
    },
    NotFound {
        reference: String,
        path: PathBuf,
        error: Error,
    },
}

impl LoadEvent {
    pub fn reference(&self) -> &str {
        match self {
            LoadEvent::Loaded { reference, .. } | LoadEvent::NotFound { reference, .. } => {
                reference
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadEvent::Loaded { path, .. } | LoadEvent::NotFound { path, .. } => path,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadEvent::Loaded { .. })
    }
}

/// Per-song load outcomes, in declaration order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub events: Vec<LoadEvent>,
}

impl LoadReport {
    pub fn loaded(&self) -> usize {
        self.events.iter().filter(|e| e.is_loaded()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &LoadEvent> {
        self.events.iter().filter(|e| !e.is_loaded())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// An ordered collection of annotated songs with a title.
#[derive(Debug, Clone)]
pub struct Songbook {
    title: String,
    base_path: PathBuf,
    songs: Vec<Song>,
}

impl Songbook {
    pub fn new(title: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            base_path: base_path.into(),
            songs: Vec::new(),
        }
    }

    /// Load a songbook from a declaration file.
    ///
    /// An unreadable or malformed declaration is an error. Missing songs
    /// are not: they show up in the returned [`LoadReport`].
    pub fn open(path: impl AsRef<Path>) -> Result<(Self, LoadReport)> {
        Self::open_with_progress(path, |_| {})
    }

    /// Like [`Songbook::open`], calling `progress` after each declared song.
    pub fn open_with_progress(
        path: impl AsRef<Path>,
        progress: impl FnMut(&LoadEvent),
    ) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        let declaration = SongbookDeclaration::from_file(path)?;
        let declaration_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        Ok(Self::from_declaration(&declaration, declaration_dir, progress))
    }

    /// Build a songbook from an already-parsed declaration.
    pub fn from_declaration(
        declaration: &SongbookDeclaration,
        declaration_dir: &Path,
        mut progress: impl FnMut(&LoadEvent),
    ) -> (Self, LoadReport) {
        let mut book = Self::new(&declaration.title, declaration.base_path(declaration_dir));
        let mut report = LoadReport::default();

        for reference in &declaration.songs {
            let event = book.load_song(reference);
            progress(&event);
            report.events.push(event);
        }

        tracing::info!(
            title = %book.title,
            loaded = report.loaded(),
            missing = report.failure_count(),
            "songbook loaded"
        );
        (book, report)
    }

    /// Resolve `reference` against the base path and append the song.
    pub fn load_song(&mut self, reference: &str) -> LoadEvent {
        let path = self.base_path.join(reference);
        match Song::open(&path) {
            Ok(song) => {
                tracing::info!(path = %path.display(), "loaded song");
                self.songs.push(song);
                LoadEvent::Loaded {
                    reference: reference.to_string(),
                    path,
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "song not found");
                LoadEvent::NotFound {
                    reference: reference.to_string(),
                    path,
                    error,
                }
            }
        }
    }

    /// Append an already-loaded song.
    pub fn push(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Combined markup for the whole book.
    pub fn compose(&self) -> String {
        let markups: Vec<String> = self.songs.iter().map(Song::markup).collect();
        compose(&self.title, markups.iter().map(String::as_str))
    }

    /// Compose the book and hand it to a renderer.
    pub fn render(
        &self,
        renderer: &dyn Renderer,
        stylesheet: Option<&Stylesheet>,
        destination: &Path,
    ) -> Result<()> {
        renderer.render(&self.compose(), stylesheet, destination)
    }
}
