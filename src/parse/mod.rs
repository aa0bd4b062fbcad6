//! Generic markup parsing for song files.
//!
//! This is the generic layer underneath the song pipeline: it knows about
//! front-matter and Markdown, but nothing about chords or choruses.
//!
//! - `front_matter`: `key: value` header capture
//! - `markdown`: Comrak AST → [`SongDocument`](crate::ir::SongDocument)

mod front_matter;
mod markdown;

pub use front_matter::{MetaMap, split_front_matter};
pub use markdown::parse_markdown;

use crate::ir::SongDocument;
use crate::util::normalize_newlines;

/// Parser output for one song file.
#[derive(Debug, Clone)]
pub struct ParsedSong {
    /// Generic block/inline tree of the song body.
    pub document: SongDocument,
    /// Front-matter captured ahead of the body.
    pub meta: MetaMap,
}

/// Parse raw song text into a document tree and its front-matter map.
pub fn parse_song(text: &str) -> ParsedSong {
    let text = normalize_newlines(text);
    let (meta, body) = split_front_matter(&text);
    ParsedSong {
        document: parse_markdown(body),
        meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{NodeId, Role};

    #[test]
    fn test_parse_song_splits_meta_and_body() {
        let parsed = parse_song("title: Habits\r\nartist: Tove Lo\r\n\r\nI eat my dinner\r\nin my bathtub\r\n");

        assert_eq!(parsed.meta["title"], vec!["Habits"]);
        let first = parsed.document.children(NodeId::ROOT).next().unwrap();
        assert_eq!(parsed.document.role(first), Some(Role::Paragraph));
        assert_eq!(
            parsed.document.text_content(first),
            "I eat my dinnerin my bathtub"
        );
    }
}
