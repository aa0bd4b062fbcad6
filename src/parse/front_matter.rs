//! Front-matter splitting.
//!
//! Song files may start with a block of `key: value` lines:
//!
//! ```text
//! Title: Habits
//! Artist: Tove Lo
//! Year: 2013
//!
//! I eat my dinner in my bathtub
//! ```
//!
//! The rules follow the Python-Markdown "meta" convention: an optional `---`
//! opening line, keys made of `[A-Za-z0-9_-]` indented at most three spaces,
//! continuation lines indented four or more spaces, and a blank line or a
//! `---`/`...` line ending the block. Keys are lower-cased.
//!
//! A block is only accepted if every line up to its end is a front-matter
//! line. Otherwise the text has no front-matter, so a song that opens with a
//! `Chorus:` label followed by lyrics keeps its first stanza.

use std::collections::BTreeMap;

/// Front-matter values keyed by lower-cased key, in source order per key.
pub type MetaMap = BTreeMap<String, Vec<String>>;

/// Split front-matter off the start of `text`.
///
/// Returns the captured map and the remaining body. Text without a leading
/// `key: value` line is returned unchanged with an empty map.
pub fn split_front_matter(text: &str) -> (MetaMap, &str) {
    let mut meta = MetaMap::new();
    let mut current_key: Option<String> = None;
    let mut rest = text;
    let mut first = true;

    while !rest.is_empty() {
        let (line, after) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], &rest[pos + 1..]),
            None => (rest, ""),
        };

        if first && line.trim_end() == "---" {
            first = false;
            rest = after;
            continue;
        }
        first = false;

        if line.trim().is_empty() {
            rest = after;
            break;
        }
        if matches!(line.trim_end(), "---" | "...") && !meta.is_empty() {
            rest = after;
            break;
        }

        if let Some((key, value)) = parse_entry(line) {
            let key = key.to_lowercase();
            meta.entry(key.clone())
                .or_default()
                .push(value.trim().to_string());
            current_key = Some(key);
        } else if let (Some(key), Some(value)) = (current_key.as_ref(), parse_continuation(line))
        {
            if let Some(values) = meta.get_mut(key) {
                values.push(value.trim().to_string());
            }
        } else {
            // Not a front-matter block after all (e.g. a stanza opening
            // with `Chorus:`): keep the whole text as body.
            return (MetaMap::new(), text);
        }
        rest = after;
    }

    (meta, rest)
}

/// Parse `   key: value` (at most three leading spaces).
fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let colon = trimmed.find(':')?;
    let key = &trimmed[..colon];
    if key.is_empty()
        || !key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return None;
    }
    Some((key, &trimmed[colon + 1..]))
}

/// Parse a continuation line (four or more leading spaces).
fn parse_continuation(line: &str) -> Option<&str> {
    let trimmed = line.trim_start_matches(' ');
    (line.len() - trimmed.len() >= 4 && !trimmed.is_empty()).then_some(trimmed)
}
