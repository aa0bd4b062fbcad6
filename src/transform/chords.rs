//! Chord token recognition.
//!
//! Finds bracketed chord symbols such as `[G]`, `[F#m]`, `[Bb7]` or `[Am7]`
//! inside text runs and splits each run into text and [`Role::Chord`] nodes.
//! Anything in brackets that is not a chord (`[H]`, `[x2]`, `[Chorus]`)
//! stays literal text.

use crate::ir::{Node, NodeId, Role, SongDocument, StyleClass, TextRange};

/// Byte span of one chord token inside a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordSpan {
    /// Offset of the opening `[`.
    pub start: usize,
    /// Offset one past the closing `]`.
    pub end: usize,
}

impl ChordSpan {
    /// Span of the symbol without brackets.
    pub fn symbol_range(&self) -> std::ops::Range<usize> {
        self.start + 1..self.end - 1
    }
}

/// Find all chord tokens in `text`, leftmost-first and non-overlapping.
pub fn find_chords(text: &str) -> Vec<ChordSpan> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(offset) = memchr::memchr(b'[', &bytes[pos..]) {
        let start = pos + offset;
        match match_chord(bytes, start) {
            Some(end) => {
                spans.push(ChordSpan { start, end });
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    spans
}

/// Match `[` note accidental? (minor? extension? | extension? minor?) `]`
/// at `start`, returning the offset past `]`.
fn match_chord(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;

    if !matches!(bytes.get(i), Some(b'A'..=b'G')) {
        return None;
    }
    i += 1;

    if matches!(bytes.get(i), Some(b'#' | b'b')) {
        i += 1;
    }

    let minor_first = bytes.get(i) == Some(&b'm');
    if minor_first {
        i += 1;
    }
    if matches!(bytes.get(i), Some(b'7' | b'9')) {
        i += 1;
    }
    if !minor_first && bytes.get(i) == Some(&b'm') {
        i += 1;
    }

    (bytes.get(i) == Some(&b']')).then_some(i + 1)
}

/// Replace chord tokens in every text run with chord annotation nodes.
///
/// Text inside code spans and code blocks is left alone. Returns the number
/// of chord annotations created.
pub fn recognize_chords(doc: &mut SongDocument) -> usize {
    let mut runs = Vec::new();
    collect_text_runs(doc, NodeId::ROOT, &mut runs);

    runs.into_iter()
        .map(|run| split_run(doc, run))
        .sum()
}

fn collect_text_runs(doc: &SongDocument, id: NodeId, out: &mut Vec<NodeId>) {
    for child in doc.children(id) {
        match doc.role(child) {
            Some(Role::Text) => out.push(child),
            Some(Role::Code | Role::CodeBlock) => {}
            Some(_) => collect_text_runs(doc, child, out),
            None => {}
        }
    }
}

fn split_run(doc: &mut SongDocument, run: NodeId) -> usize {
    let spans = find_chords(doc.node_text(run));
    if spans.is_empty() {
        return 0;
    }
    let Some(range) = doc.node(run).map(|n| n.text) else {
        return 0;
    };

    // Sub-ranges point into the existing buffer; nothing is copied.
    let sub = |from: usize, to: usize| TextRange::new(range.start + from as u32, (to - from) as u32);

    let mut cursor = 0;
    for span in &spans {
        if span.start > cursor {
            let before = doc.alloc_node(Node::text(sub(cursor, span.start)));
            doc.insert_before(run, before);
        }
        let symbol = span.symbol_range();
        let chord = doc.alloc_node(Node::chord(sub(symbol.start, symbol.end)));
        doc.semantics.add_class(chord, StyleClass::Chord);
        doc.insert_before(run, chord);
        cursor = span.end;
    }

    let len = range.len as usize;
    if cursor < len {
        if let Some(node) = doc.node_mut(run) {
            node.text = sub(cursor, len);
        }
    } else {
        doc.detach(run);
    }

    spans.len()
}
