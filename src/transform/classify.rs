//! Stanza classification.
//!
//! A stanza whose first line is a label such as `Chorus:` or `Comment:` is
//! tagged with that role and loses the label line. Everything else is a
//! verse. Stanzas containing chord annotations are additionally tagged
//! `with-chords`.

use crate::ir::{NodeId, Role, SongDocument, StyleClass};

/// Labels that mark a chorus stanza (compared after lower-casing).
pub const CHORUS_LABELS: &[&str] = &["chorus", "refr", "refräng"];

/// Label that marks a comment stanza.
pub const COMMENT_LABEL: &str = "comment";

/// Semantic role of a lyric stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParagraphRole {
    #[default]
    Verse,
    Chorus,
    Comment,
}

impl ParagraphRole {
    /// Role selected by a normalized label, if any.
    pub fn from_label(label: &str) -> Option<Self> {
        if CHORUS_LABELS.contains(&label) {
            Some(ParagraphRole::Chorus)
        } else if label == COMMENT_LABEL {
            Some(ParagraphRole::Comment)
        } else {
            None
        }
    }

    pub fn style_class(self) -> StyleClass {
        match self {
            ParagraphRole::Verse => StyleClass::Verse,
            ParagraphRole::Chorus => StyleClass::Chorus,
            ParagraphRole::Comment => StyleClass::Comment,
        }
    }

    /// Role carried by a node's style hints, if it was classified.
    pub fn of(doc: &SongDocument, id: NodeId) -> Option<Self> {
        doc.semantics.classes(id).iter().find_map(|class| match class {
            StyleClass::Verse => Some(ParagraphRole::Verse),
            StyleClass::Chorus => Some(ParagraphRole::Chorus),
            StyleClass::Comment => Some(ParagraphRole::Comment),
            _ => None,
        })
    }
}

/// Classify every top-level paragraph. Returns the number classified.
pub fn classify_paragraphs(doc: &mut SongDocument) -> usize {
    let paragraphs: Vec<NodeId> = doc
        .children(NodeId::ROOT)
        .filter(|id| doc.role(*id) == Some(Role::Paragraph))
        .collect();

    paragraphs
        .into_iter()
        .filter_map(|para| classify_paragraph(doc, para))
        .count()
}

/// Classify one paragraph, returning its role, or `None` if it has no content.
pub fn classify_paragraph(doc: &mut SongDocument, para: NodeId) -> Option<ParagraphRole> {
    if !contains_chord(doc, para) && doc.text_content(para).trim().is_empty() {
        return None;
    }

    let label = normalize_label(&first_line_text(doc, para));
    let role = ParagraphRole::from_label(&label).unwrap_or_default();
    if role != ParagraphRole::Verse {
        strip_first_line(doc, para);
    }

    doc.semantics.add_class(para, role.style_class());
    if contains_chord(doc, para) {
        doc.semantics.add_class(para, StyleClass::WithChords);
    }
    Some(role)
}

/// Trim, lower-case and drop one trailing colon.
pub fn normalize_label(line: &str) -> String {
    let label = line.trim().to_lowercase();
    match label.strip_suffix(':') {
        Some(stripped) => stripped.trim_end().to_string(),
        None => label,
    }
}

/// Text of the first logical line: every text run before the first break,
/// including runs nested in inline markup. Chord symbols are not text.
fn first_line_text(doc: &SongDocument, para: NodeId) -> String {
    let mut line = String::new();
    for child in doc.children(para) {
        if doc.role(child) == Some(Role::Break) {
            break;
        }
        line.push_str(&doc.text_content(child));
    }
    line
}

/// Remove every inline node up to and including the first break.
///
/// Chords written on the label line are kept: they move to the start of
/// the next line, in their original order.
fn strip_first_line(doc: &mut SongDocument, para: NodeId) {
    let children: Vec<NodeId> = doc.children(para).collect();
    let mut chords = Vec::new();
    for child in children {
        let role = doc.role(child);
        doc.detach(child);
        match role {
            Some(Role::Break) => break,
            Some(Role::Chord) => chords.push(child),
            _ => {}
        }
    }

    for chord in chords.into_iter().rev() {
        doc.prepend_child(para, chord);
    }
}

fn contains_chord(doc: &SongDocument, id: NodeId) -> bool {
    doc.descendants(id)
        .any(|node| doc.role(node) == Some(Role::Chord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Node;

    /// Build a paragraph from lines joined by breaks.
    fn paragraph(doc: &mut SongDocument, lines: &[&str]) -> NodeId {
        let para = doc.alloc_node(Node::new(Role::Paragraph));
        doc.append_child(NodeId::ROOT, para);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                let br = doc.alloc_node(Node::new(Role::Break));
                doc.append_child(para, br);
            }
            let text = doc.alloc_text(line);
            doc.append_child(para, text);
        }
        para
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Chorus:  "), "chorus");
        assert_eq!(normalize_label("REFRÄNG"), "refräng");
        assert_eq!(normalize_label("Comment :"), "comment");
        assert_eq!(normalize_label("chorus::"), "chorus:");
    }

    #[test]
    fn test_chorus_labels_strip_first_line() {
        for label in ["Chorus:", "chorus", "Refr:", "REFRÄNG:", "Refräng"] {
            let mut doc = SongDocument::new();
            let para = paragraph(&mut doc, &[label, "Oh oh oh", "Yeah"]);

            assert_eq!(classify_paragraph(&mut doc, para), Some(ParagraphRole::Chorus));
            assert_eq!(doc.text_content(para), "Oh oh ohYeah");
            assert_eq!(doc.role(doc.children(para).next().unwrap()), Some(Role::Text));
            assert!(doc.semantics.has_class(para, StyleClass::Chorus));
        }
    }

    #[test]
    fn test_comment_label() {
        let mut doc = SongDocument::new();
        let para = paragraph(&mut doc, &["Comment:", "Capo on 2nd fret"]);

        assert_eq!(classify_paragraph(&mut doc, para), Some(ParagraphRole::Comment));
        assert_eq!(doc.text_content(para), "Capo on 2nd fret");
        assert_eq!(doc.semantics.class_attr(para).as_deref(), Some("comment"));
    }

    #[test]
    fn test_verse_keeps_all_text() {
        let mut doc = SongDocument::new();
        let para = paragraph(&mut doc, &["Choruses are great", "second line"]);

        assert_eq!(classify_paragraph(&mut doc, para), Some(ParagraphRole::Verse));
        assert_eq!(doc.text_content(para), "Choruses are greatsecond line");
        assert_eq!(doc.children(para).count(), 3);
    }

    #[test]
    fn test_label_only_paragraph_becomes_empty_chorus() {
        let mut doc = SongDocument::new();
        let para = paragraph(&mut doc, &["Chorus:"]);

        assert_eq!(classify_paragraph(&mut doc, para), Some(ParagraphRole::Chorus));
        assert_eq!(doc.children(para).count(), 0);
    }

    #[test]
    fn test_empty_paragraph_is_unclassified() {
        let mut doc = SongDocument::new();
        let para = paragraph(&mut doc, &["   "]);

        assert_eq!(classify_paragraph(&mut doc, para), None);
        assert!(doc.semantics.classes(para).is_empty());
    }

    #[test]
    fn test_label_inside_emphasis_counts() {
        // The label is read across inline markup, not only the leading run.
        let mut doc = SongDocument::new();
        let para = doc.alloc_node(Node::new(Role::Paragraph));
        doc.append_child(NodeId::ROOT, para);
        let em = doc.alloc_element_with_text(Role::Emphasis, "Chorus");
        doc.append_child(para, em);
        let colon = doc.alloc_text(":");
        doc.append_child(para, colon);
        let br = doc.alloc_node(Node::new(Role::Break));
        doc.append_child(para, br);
        let lyric = doc.alloc_text("La la");
        doc.append_child(para, lyric);

        assert_eq!(classify_paragraph(&mut doc, para), Some(ParagraphRole::Chorus));
        assert_eq!(doc.text_content(para), "La la");
    }

    #[test]
    fn test_chord_flag_and_leading_chord() {
        // A stanza starting with a chord is still classified.
        let mut doc = SongDocument::new();
        let para = doc.alloc_node(Node::new(Role::Paragraph));
        doc.append_child(NodeId::ROOT, para);
        let range = doc.append_text("G");
        let chord = doc.alloc_node(Node::chord(range));
        doc.append_child(para, chord);
        let text = doc.alloc_text("Hello");
        doc.append_child(para, text);

        assert_eq!(classify_paragraph(&mut doc, para), Some(ParagraphRole::Verse));
        assert_eq!(doc.semantics.class_attr(para).as_deref(), Some("verse with-chords"));
    }

    #[test]
    fn test_chord_on_label_line_moves_to_lyrics() {
        let mut doc = SongDocument::new();
        let para = doc.alloc_node(Node::new(Role::Paragraph));
        doc.append_child(NodeId::ROOT, para);
        let range = doc.append_text("G");
        let chord = doc.alloc_node(Node::chord(range));
        doc.append_child(para, chord);
        let label = doc.alloc_text("Chorus:");
        doc.append_child(para, label);
        let br = doc.alloc_node(Node::new(Role::Break));
        doc.append_child(para, br);
        let lyric = doc.alloc_text("la la");
        doc.append_child(para, lyric);

        assert_eq!(classify_paragraph(&mut doc, para), Some(ParagraphRole::Chorus));
        let children: Vec<NodeId> = doc.children(para).collect();
        assert_eq!(children, vec![chord, lyric]);
        assert_eq!(doc.node_text(chord), "G");
        assert_eq!(doc.semantics.class_attr(para).as_deref(), Some("chorus with-chords"));
    }

    #[test]
    fn test_chord_flag_reflects_remaining_content() {
        // A chord nested in markup on the label line goes with the label.
        let mut doc = SongDocument::new();
        let para = doc.alloc_node(Node::new(Role::Paragraph));
        doc.append_child(NodeId::ROOT, para);
        let em = doc.alloc_node(Node::new(Role::Emphasis));
        doc.append_child(para, em);
        let range = doc.append_text("G");
        let chord = doc.alloc_node(Node::chord(range));
        doc.append_child(em, chord);
        let label = doc.alloc_text("Chorus:");
        doc.append_child(em, label);
        let br = doc.alloc_node(Node::new(Role::Break));
        doc.append_child(para, br);
        let lyric = doc.alloc_text("la la");
        doc.append_child(para, lyric);

        assert_eq!(classify_paragraph(&mut doc, para), Some(ParagraphRole::Chorus));
        assert_eq!(doc.semantics.class_attr(para).as_deref(), Some("chorus"));
    }

    #[test]
    fn test_classify_only_top_level_paragraphs() {
        let mut doc = SongDocument::new();
        let quote = doc.alloc_node(Node::new(Role::BlockQuote));
        doc.append_child(NodeId::ROOT, quote);
        let nested = doc.alloc_node(Node::new(Role::Paragraph));
        doc.append_child(quote, nested);
        let text = doc.alloc_text("Chorus:");
        doc.append_child(nested, text);
        let top = paragraph(&mut doc, &["Verse line"]);

        assert_eq!(classify_paragraphs(&mut doc), 1);
        assert!(doc.semantics.classes(nested).is_empty());
        assert_eq!(ParagraphRole::of(&doc, top), Some(ParagraphRole::Verse));
    }
}
