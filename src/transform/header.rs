//! Song header synthesis: title heading and artist/author/year list.

use crate::ir::{Node, NodeId, Role, SongDocument, StyleClass};

use super::metadata::Metadata;

/// Prepend the title heading and metadata list to the document.
///
/// The list goes in first, then the title, so the final order is title,
/// list, original body. Either element is skipped when it has nothing to
/// show.
pub fn inject_header(doc: &mut SongDocument, metadata: &Metadata) {
    let entries = metadata.header_entries();
    if !entries.is_empty() {
        let list = doc.alloc_node(Node::new(Role::UnorderedList));
        doc.semantics.add_class(list, StyleClass::SongMeta);
        for (label, value) in entries {
            let item = doc.alloc_element_with_text(Role::ListItem, &format!("{label}: {value}"));
            doc.append_child(list, item);
        }
        doc.prepend_child(NodeId::ROOT, list);
    }

    if let Some(title) = &metadata.title {
        let heading = doc.alloc_element_with_text(Role::Heading(1), title);
        doc.semantics.add_class(heading, StyleClass::SongTitle);
        doc.prepend_child(NodeId::ROOT, heading);
    }
}
