//! songprint - Annotated songbook composer

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use songprint::{HtmlRenderer, LoadEvent, PdfRenderer, Renderer, Songbook, Stylesheet};

#[derive(Parser)]
#[command(name = "songprint")]
#[command(version, about = "Compose annotated song lyrics into a songbook", long_about = None)]
#[command(after_help = "EXAMPLES:
    songprint book.json                  Render book.json to output.pdf
    songprint book.json -o book.html     Render to a standalone HTML file
    songprint book.json --renderer wkhtmltopdf")]
struct Cli {
    /// Songbook declaration (JSON)
    #[arg(value_name = "DECLARATION")]
    declaration: PathBuf,

    /// Output file
    #[arg(short, long, value_name = "OUTPUT", default_value = "output.pdf")]
    output: PathBuf,

    /// Output format (inferred from the output extension when omitted)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Stylesheet to use instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    stylesheet: Option<PathBuf>,

    /// HTML-to-PDF converter program
    #[arg(long, value_name = "PROGRAM")]
    renderer: Option<String>,

    /// Suppress progress messages
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Pdf,
}

impl Format {
    fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
                Format::Html
            }
            _ => Format::Pdf,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("songprint=warn")),
        )
        .init();

    let cli = Cli::parse();

    match build(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build(cli: &Cli) -> songprint::Result<()> {
    let quiet = cli.quiet;
    let (book, report) = Songbook::open_with_progress(&cli.declaration, |event| {
        if quiet {
            return;
        }
        match event {
            LoadEvent::Loaded { path, .. } => eprintln!("loaded {}", path.display()),
            LoadEvent::NotFound { path, .. } => eprintln!("not found {}", path.display()),
        }
    })?;

    let stylesheet = match &cli.stylesheet {
        Some(path) => Stylesheet::from_file(path)?,
        None => Stylesheet::default(),
    };

    let format = cli.format.unwrap_or_else(|| Format::infer(&cli.output));
    let renderer: Box<dyn Renderer> = match format {
        Format::Html => Box::new(HtmlRenderer::new().with_title(book.title())),
        Format::Pdf => {
            let mut pdf = PdfRenderer::new().with_title(book.title());
            if let Some(program) = &cli.renderer {
                pdf = pdf.with_program(program);
            }
            Box::new(pdf)
        }
    };

    book.render(renderer.as_ref(), Some(&stylesheet), &cli.output)?;

    if !quiet {
        eprintln!(
            "wrote {} ({} songs, {} missing)",
            cli.output.display(),
            report.loaded(),
            report.failure_count()
        );
    }
    Ok(())
}
