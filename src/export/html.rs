//! Standalone HTML output.

use std::fs;
use std::path::Path;

use crate::error::Result;

use super::Renderer;
use super::html_synth::synthesize_html_document;
use super::stylesheet::Stylesheet;

/// Writes the songbook as one self-contained HTML file.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            title: "Songbook".to_string(),
        }
    }

    /// Set the document `<title>`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, markup: &str, stylesheet: Option<&Stylesheet>, destination: &Path) -> Result<()> {
        let document = synthesize_html_document(markup, &self.title, stylesheet);
        fs::write(destination, document)?;
        tracing::info!(destination = %destination.display(), "wrote HTML songbook");
        Ok(())
    }
}
