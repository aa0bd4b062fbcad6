//! Song annotation passes.
//!
//! These passes run after the generic markup parse and turn a plain document
//! tree into an annotated song.
//!
//! ## Pipeline Order
//!
//! 1. **Metadata** - Read title/artist/author/year from front-matter
//! 2. **Chords** - Replace `[Am]` tokens with chord annotations
//! 3. **Classify** - Tag stanzas as verse/chorus/comment and with-chords
//! 4. **Header** - Prepend the title heading and metadata list
//!
//! Chords must run before classification so the with-chords flag sees them,
//! and metadata before the header so there is something to show.

mod chords;
mod classify;
mod header;
mod metadata;

pub use chords::{ChordSpan, find_chords, recognize_chords};
pub use classify::{
    CHORUS_LABELS, COMMENT_LABEL, ParagraphRole, classify_paragraph, classify_paragraphs,
    normalize_label,
};
pub use header::inject_header;
pub use metadata::{Metadata, extract_metadata};

use crate::ir::SongDocument;
use crate::parse::MetaMap;

/// Run all song passes on a document and return its metadata.
///
/// The pipeline runs at most once per document: a document that has already
/// been transformed is left untouched, so headers are never injected twice.
pub fn transform_song(doc: &mut SongDocument, meta: &MetaMap) -> Metadata {
    let metadata = extract_metadata(meta);

    if doc.is_transformed() {
        tracing::debug!("song already transformed, skipping passes");
        return metadata;
    }

    let chords = recognize_chords(doc);
    let stanzas = classify_paragraphs(doc);
    inject_header(doc, &metadata);
    doc.mark_transformed();

    tracing::debug!(
        title = metadata.title.as_deref().unwrap_or(""),
        chords,
        stanzas,
        "song transformed"
    );
    metadata
}
