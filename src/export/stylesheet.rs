//! Stylesheet resource handed to renderers.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::ir::StyleClass;

/// Built-in stylesheet covering every class the pipeline emits.
pub const DEFAULT_STYLESHEET: &str = r#"@page { size: A4; margin: 2cm; }
body { font-family: "DejaVu Sans", sans-serif; font-size: 11pt; }
h1.book-title { font-size: 28pt; text-align: center; margin-top: 40%; }
h1.song-title { font-size: 18pt; margin-bottom: 0.2em; }
ul.song-meta { list-style: none; padding: 0; margin: 0 0 1.5em 0; color: #555; font-size: 9pt; }
p.verse { margin: 0 0 1em 0; }
p.chorus { margin: 0 0 1em 1.5em; font-style: italic; }
p.comment { margin: 0 0 1em 0; color: #777; font-size: 9pt; }
p.with-chords { line-height: 2.6; }
span.chord { display: inline-block; width: 0; position: relative; top: -1.2em; font-weight: bold; font-style: normal; font-size: 9pt; white-space: nowrap; }
div.page-break { height: 0; page-break-after: always; break-after: page; }
"#;

/// A CSS stylesheet passed explicitly to the render step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    css: String,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::default_songbook()
    }
}

impl Stylesheet {
    /// Create a stylesheet from CSS text.
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// The built-in songbook stylesheet.
    pub fn default_songbook() -> Self {
        Self::new(DEFAULT_STYLESHEET)
    }

    /// Load a stylesheet from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// The CSS text.
    pub fn as_str(&self) -> &str {
        &self.css
    }

    /// Whether the stylesheet mentions a class selector for `class`.
    pub fn defines(&self, class: StyleClass) -> bool {
        let selector = format!(".{}", class.as_str());
        self.css.match_indices(&selector).any(|(pos, _)| {
            let next = self.css[pos + selector.len()..].chars().next();
            !matches!(next, Some(c) if c.is_alphanumeric() || c == '-' || c == '_')
        })
    }
}
