//! Song metadata extraction from front-matter.

use crate::parse::MetaMap;

/// Named song fields read from front-matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
}

impl Metadata {
    /// Create metadata with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// `(label, value)` pairs for the header list, in display order.
    ///
    /// Only present fields are returned.
    pub fn header_entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Artist", &self.artist),
            ("Author", &self.author),
            ("Year", &self.year),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }

    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.header_entries().is_empty()
    }
}

const HEADER_KEYS: &[&str] = &["title", "artist", "author", "year"];

/// Read `title`, `artist`, `author` and `year` from a front-matter map.
///
/// The first value of each key wins. Blank values are absent. A year that is
/// not an integer is dropped with a warning; a valid one is kept as written.
/// Other keys are ignored.
pub fn extract_metadata(meta: &MetaMap) -> Metadata {
    let year = first_value(meta, "year").filter(|year| {
        let valid = year.parse::<i32>().is_ok();
        if !valid {
            tracing::warn!(year = %year, "ignoring malformed year in song metadata");
        }
        valid
    });

    for key in meta.keys().filter(|key| !HEADER_KEYS.contains(&key.as_str())) {
        tracing::debug!(key = %key, "front-matter key not shown in song header");
    }

    Metadata {
        title: first_value(meta, "title"),
        artist: first_value(meta, "artist"),
        author: first_value(meta, "author"),
        year,
    }
}

fn first_value(meta: &MetaMap, key: &str) -> Option<String> {
    meta.get(&key.to_lowercase())
        .and_then(|values| values.first())
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(entries: &[(&str, &[&str])]) -> MetaMap {
        entries
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_extract_all_fields() {
        let map = meta(&[
            ("title", &["Habits"]),
            ("artist", &["Tove Lo"]),
            ("author", &["Tove Lo, Jakob Jerlström"]),
            ("year", &["2013"]),
        ]);

        assert_eq!(
            extract_metadata(&map),
            Metadata::new("Habits")
                .with_artist("Tove Lo")
                .with_author("Tove Lo, Jakob Jerlström")
                .with_year("2013")
        );
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let result = extract_metadata(&MetaMap::new());
        assert_eq!(result, Metadata::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_first_value_wins() {
        let map = meta(&[("artist", &["First", "Second"])]);
        assert_eq!(extract_metadata(&map).artist.as_deref(), Some("First"));
    }

    #[test]
    fn test_malformed_year_is_absent() {
        let map = meta(&[("year", &["nineteen-eighty"])]);
        assert_eq!(extract_metadata(&map).year, None);

        let map = meta(&[("year", &[" 1984 "])]);
        assert_eq!(extract_metadata(&map).year.as_deref(), Some("1984"));
    }

    #[test]
    fn test_year_keeps_written_form() {
        let map = meta(&[("year", &["0042"])]);
        assert_eq!(extract_metadata(&map).year.as_deref(), Some("0042"));

        let map = meta(&[("year", &["+2013"])]);
        assert_eq!(extract_metadata(&map).year.as_deref(), Some("+2013"));
    }

    #[test]
    fn test_blank_value_is_absent() {
        let map = meta(&[("title", &["   "])]);
        assert_eq!(extract_metadata(&map).title, None);
    }

    #[test]
    fn test_header_entries_order_and_omission() {
        let only_artist = Metadata::default().with_artist("Tove Lo");
        assert_eq!(only_artist.header_entries(), vec![("Artist", "Tove Lo")]);

        let full = Metadata::default()
            .with_year("2013")
            .with_author("B")
            .with_artist("A");
        assert_eq!(
            full.header_entries(),
            vec![("Artist", "A"), ("Author", "B"), ("Year", "2013")]
        );
    }
}
