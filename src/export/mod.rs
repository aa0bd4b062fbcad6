//! Export module for turning songs into markup and output files.
//!
//! Provides the [`Renderer`] trait and its implementations, plus the HTML
//! synthesizer and stylesheet they share.
//!
//! # Architecture
//!
//! Renderers use a builder pattern:
//! - `new()` creates a renderer with default configuration
//! - `with_*()` methods customize it
//! - `render()` writes combined songbook markup to a destination path
//!
//! # Example
//!
//! ```no_run
//! use songprint::export::{HtmlRenderer, Renderer, Stylesheet};
//! use std::path::Path;
//!
//! let markup = "<h1 class=\"book-title\">Camp Songs</h1>\n";
//! HtmlRenderer::new()
//!     .with_title("Camp Songs")
//!     .render(markup, Some(&Stylesheet::default()), Path::new("book.html"))?;
//! # Ok::<(), songprint::Error>(())
//! ```

use std::path::Path;

use crate::error::Result;

mod html;
mod html_synth;
mod pdf;
mod stylesheet;

pub use html::HtmlRenderer;
pub use html_synth::{synthesize_html, synthesize_html_document};
pub use pdf::{DEFAULT_PDF_PROGRAM, PdfRenderer};
pub use stylesheet::{DEFAULT_STYLESHEET, Stylesheet};

/// Trait for writing combined songbook markup to an output artifact.
pub trait Renderer {
    /// Render `markup` (an HTML body fragment) with an optional stylesheet
    /// to `destination`.
    fn render(&self, markup: &str, stylesheet: Option<&Stylesheet>, destination: &Path) -> Result<()>;
}
