//! Sparse semantic attributes and style hints for song tree nodes.
//!
//! Most nodes carry nothing beyond their role. Links need an href, code
//! blocks may name a language, and classified paragraphs carry one or more
//! [`StyleClass`] hints. Storing these in side maps keeps [`Node`](super::Node)
//! small.

use std::collections::HashMap;

use super::node::NodeId;

/// Renderable style hint attached to a node.
///
/// Each variant corresponds to one CSS class the default stylesheet defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Synthesized song title heading.
    SongTitle,
    /// Synthesized artist/author/year list.
    SongMeta,
    /// Default stanza role.
    Verse,
    /// Chorus stanza (labelled `Chorus:`, `Refr:` or `Refräng:`).
    Chorus,
    /// Free-form comment stanza (labelled `Comment:`).
    Comment,
    /// Stanza containing at least one chord annotation.
    WithChords,
    /// A chord annotation.
    Chord,
    /// Songbook title heading.
    BookTitle,
    /// Wrapper around one song in a composed songbook.
    Song,
    /// Separator forcing the next song onto a new page.
    PageBreak,
}

impl StyleClass {
    /// The CSS class name.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleClass::SongTitle => "song-title",
            StyleClass::SongMeta => "song-meta",
            StyleClass::Verse => "verse",
            StyleClass::Chorus => "chorus",
            StyleClass::Comment => "comment",
            StyleClass::WithChords => "with-chords",
            StyleClass::Chord => "chord",
            StyleClass::BookTitle => "book-title",
            StyleClass::Song => "song",
            StyleClass::PageBreak => "page-break",
        }
    }
}

/// Sparse map for semantic attributes.
#[derive(Debug, Default, Clone)]
pub struct SemanticMap {
    /// href attribute (for links).
    href: HashMap<NodeId, String>,
    /// Programming language for code blocks.
    language: HashMap<NodeId, String>,
    /// Style hints, in attachment order.
    classes: HashMap<NodeId, Vec<StyleClass>>,
}

impl SemanticMap {
    /// Create a new empty semantic map.
    pub fn new() -> Self {
        Self::default()
    }

    // --- href ---

    /// Set the href for a node.
    pub fn set_href(&mut self, node: NodeId, href: &str) {
        if !href.is_empty() {
            self.href.insert(node, href.to_string());
        }
    }

    /// Get the href for a node.
    pub fn href(&self, node: NodeId) -> Option<&str> {
        self.href.get(&node).map(String::as_str)
    }

    // --- language ---

    /// Set the code language for a node.
    pub fn set_language(&mut self, node: NodeId, language: &str) {
        if !language.is_empty() {
            self.language.insert(node, language.to_string());
        }
    }

    /// Get the code language for a node.
    pub fn language(&self, node: NodeId) -> Option<&str> {
        self.language.get(&node).map(String::as_str)
    }

    // --- style classes ---

    /// Attach a style hint to a node. Attaching the same hint twice is a no-op.
    pub fn add_class(&mut self, node: NodeId, class: StyleClass) {
        let classes = self.classes.entry(node).or_default();
        if !classes.contains(&class) {
            classes.push(class);
        }
    }

    /// Style hints attached to a node, in attachment order.
    pub fn classes(&self, node: NodeId) -> &[StyleClass] {
        self.classes.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a node carries the given hint.
    pub fn has_class(&self, node: NodeId, class: StyleClass) -> bool {
        self.classes(node).contains(&class)
    }

    /// Space-separated class attribute value, if the node has any hints.
    pub fn class_attr(&self, node: NodeId) -> Option<String> {
        let classes = self.classes(node);
        if classes.is_empty() {
            return None;
        }
        let names: Vec<&str> = classes.iter().map(|c| c.as_str()).collect();
        Some(names.join(" "))
    }
}
