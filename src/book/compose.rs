use std::fmt::Write;

use quick_xml::escape::partial_escape;

use crate::ir::StyleClass;

/// Join song markup into one songbook body.
///
/// The book title comes first, then each song wrapped in its own container,
/// with a page-break marker between consecutive songs.
pub fn compose<'a>(title: &str, songs: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<h1 class=\"{}\">{}</h1>",
        StyleClass::BookTitle.as_str(),
        partial_escape(title)
    );

    for (index, markup) in songs.into_iter().enumerate() {
        if index > 0 {
            let _ = writeln!(out, "<div class=\"{}\"></div>", StyleClass::PageBreak.as_str());
        }
        let _ = writeln!(out, "<div class=\"{}\">", StyleClass::Song.as_str());
        out.push_str(markup);
        if !markup.is_empty() && !markup.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</div>\n");
    }

    out
}
