//! # songprint
//!
//! Annotates plain song lyrics written in lightweight markup and composes
//! them into a printable songbook.
//!
//! ## Features
//!
//! - Front-matter metadata (title, artist, author, year)
//! - Inline chord symbols such as `[Am]` or `[F#7]`
//! - Verse, chorus and comment paragraphs picked out by a leading label
//! - Songbooks declared in JSON, rendered to HTML or PDF
//!
//! ## Quick Start
//!
//! ```
//! use songprint::Song;
//!
//! let song = Song::from_source(
//!     "habits.txt",
//!     "Title: Habits\nArtist: Tove Lo\n\nI [Am]eat my dinner\n",
//! );
//!
//! assert_eq!(song.display_title(), "Habits");
//! assert!(song.markup().contains(r#"<span class="chord">Am</span>"#));
//! ```
//!
//! ## Songbooks
//!
//! ```no_run
//! use std::path::Path;
//! use songprint::{PdfRenderer, Songbook};
//!
//! let (book, report) = Songbook::open("songbook.json")?;
//! for failure in report.failures() {
//!     eprintln!("missing: {}", failure.path().display());
//! }
//! book.render(&PdfRenderer::new(), None, Path::new("output.pdf"))?;
//! # Ok::<(), songprint::Error>(())
//! ```

pub mod book;
pub mod error;
pub mod export;
pub mod ir;
pub mod parse;
pub mod transform;
pub(crate) mod util;

pub use book::{LoadEvent, LoadReport, Song, Songbook, SongbookDeclaration, compose};
pub use error::{Error, Result};
pub use export::{HtmlRenderer, PdfRenderer, Renderer, Stylesheet};
pub use ir::{SongDocument, StyleClass};
pub use parse::{ParsedSong, parse_song};
pub use transform::{Metadata, transform_song};
