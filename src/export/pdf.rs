//! PDF output through an external HTML-to-PDF program.
//!
//! Layout and pagination are not done here. The complete HTML document is
//! piped to a converter such as WeasyPrint, which writes the PDF itself.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

use super::Renderer;
use super::html_synth::synthesize_html_document;
use super::stylesheet::Stylesheet;

/// Default converter program.
pub const DEFAULT_PDF_PROGRAM: &str = "weasyprint";

/// Renders by spawning `<program> [args...] - <destination>` and writing the
/// HTML document to its stdin.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    program: String,
    args: Vec<String>,
    title: String,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PDF_PROGRAM.to_string(),
            args: Vec::new(),
            title: "Songbook".to_string(),
        }
    }

    /// Use a different converter program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Extra arguments placed before the input/output arguments.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the document `<title>`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Renderer for PdfRenderer {
    fn render(&self, markup: &str, stylesheet: Option<&Stylesheet>, destination: &Path) -> Result<()> {
        let document = synthesize_html_document(markup, &self.title, stylesheet);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg("-")
            .arg(destination)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Render(format!("cannot run {}: {e}", self.program)))?;

        // The pipe is closed when `stdin` drops at the end of the match arm.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(document.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(Error::Render(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        if let Err(e) = written {
            return Err(Error::Render(format!(
                "{} stopped reading its input ({e}): {}",
                self.program,
                stderr.trim()
            )));
        }

        tracing::info!(
            program = %self.program,
            destination = %destination.display(),
            "wrote PDF songbook"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program() {
        assert_eq!(PdfRenderer::new().program(), "weasyprint");
    }

    #[test]
    fn test_missing_program_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.pdf");

        let result = PdfRenderer::new()
            .with_program("songprint-no-such-converter")
            .render("<p>x</p>", None, &path);

        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_converter_receives_html_on_stdin() {
        // `sh -c 'cat > "$2"' sh - <dest>` copies stdin to the destination
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.out");

        PdfRenderer::new()
            .with_program("sh")
            .with_arg("-c")
            .with_arg("cat > \"$2\"")
            .with_arg("sh")
            .render("<p>piped</p>\n", None, &path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<p>piped</p>"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_converter_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.pdf");

        let result = PdfRenderer::new()
            .with_program("sh")
            .with_arg("-c")
            .with_arg("cat > /dev/null; echo broken >&2; exit 3")
            .with_arg("sh")
            .render("<p>x</p>", None, &path);

        match result {
            Err(Error::Render(message)) => assert!(message.contains("broken")),
            other => panic!("expected render error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_converter_exiting_early_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.pdf");
        let markup = "<p>la la la</p>\n".repeat(100_000);

        let result = PdfRenderer::new()
            .with_program("sh")
            .with_arg("-c")
            .with_arg("echo 'bad input' >&2; exit 4")
            .with_arg("sh")
            .render(&markup, None, &path);

        match result {
            Err(Error::Render(message)) => assert!(message.contains("bad input")),
            other => panic!("expected render error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_converter_ignoring_input_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.pdf");
        let markup = "<p>la la la</p>\n".repeat(100_000);

        let result = PdfRenderer::new()
            .with_program("sh")
            .with_arg("-c")
            .with_arg("echo 'no stdin here' >&2")
            .with_arg("sh")
            .render(&markup, None, &path);

        match result {
            Err(Error::Render(message)) => assert!(message.contains("no stdin here")),
            other => panic!("expected render error, got {other:?}"),
        }
    }
}
