//! Arena-backed document tree for a single song.
//!
//! The tree uses a parent-pointer / first-child / next-sibling representation
//! over a flat `Vec<Node>`, so transform passes can insert, detach and reorder
//! nodes through [`NodeId`] handles without aliasing borrows. Text content
//! lives in one buffer; nodes reference ranges into it.
//!
//! # Example
//!
//! ```
//! use songprint::ir::{Node, NodeId, Role, SongDocument};
//!
//! let mut doc = SongDocument::new();
//! let para = doc.alloc_node(Node::new(Role::Paragraph));
//! doc.append_child(NodeId::ROOT, para);
//! let range = doc.append_text("Oh my darling");
//! let text = doc.alloc_node(Node::text(range));
//! doc.append_child(para, text);
//!
//! assert_eq!(doc.text_content(para), "Oh my darling");
//! ```

mod node;
mod semantic;

pub use node::{Node, NodeId, Role, TextRange};
pub use semantic::{SemanticMap, StyleClass};

/// A song's content as a mutable block/inline tree.
#[derive(Debug, Clone)]
pub struct SongDocument {
    /// All nodes ever allocated (index 0 is always the root).
    /// Detached nodes stay in the arena but are unreachable from the root.
    nodes: Vec<Node>,
    /// Sparse semantic attributes and style hints.
    pub semantics: SemanticMap,
    /// Text buffer (nodes reference ranges into this).
    text: String,
    /// Set once the song transform pipeline has run.
    transformed: bool,
}

impl Default for SongDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SongDocument {
    /// Create a new empty document with a root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Role::Root)],
            semantics: SemanticMap::new(),
            text: String::new(),
            transformed: false,
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Role of a node, if it exists.
    pub fn role(&self, id: NodeId) -> Option<Role> {
        self.node(id).map(|n| n.role)
    }

    /// Get the number of allocated nodes (including detached ones).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the song transform pipeline has already run on this document.
    pub fn is_transformed(&self) -> bool {
        self.transformed
    }

    /// Mark the document as transformed.
    pub fn mark_transformed(&mut self) {
        self.transformed = true;
    }

    /// Allocate a new node and return its ID.
    pub fn alloc_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append text to the buffer and return the range.
    pub fn append_text(&mut self, text: &str) -> TextRange {
        let start = self.text.len() as u32;
        self.text.push_str(text);
        TextRange::new(start, text.len() as u32)
    }

    /// Get text from a range.
    pub fn text(&self, range: TextRange) -> &str {
        let start = range.start as usize;
        let end = range.end() as usize;
        &self.text[start..end]
    }

    /// Text of a Text or Chord node; empty for other roles.
    pub fn node_text(&self, id: NodeId) -> &str {
        match self.node(id) {
            Some(node) if matches!(node.role, Role::Text | Role::Chord) => self.text(node.text),
            _ => "",
        }
    }

    /// Allocate a text node holding `text`.
    pub fn alloc_text(&mut self, text: &str) -> NodeId {
        let range = self.append_text(text);
        self.alloc_node(Node::text(range))
    }

    /// Allocate an element with a single text child.
    pub fn alloc_element_with_text(&mut self, role: Role, text: &str) -> NodeId {
        let element = self.alloc_node(Node::new(role));
        let child = self.alloc_text(text);
        self.append_child(element, child);
        element
    }

    /// Append a child node to a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(child_node) = self.node_mut(child) {
            child_node.parent = Some(parent);
            child_node.next_sibling = None;
        }

        match self.last_child(parent) {
            Some(last) => {
                if let Some(last_node) = self.node_mut(last) {
                    last_node.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(parent_node) = self.node_mut(parent) {
                    parent_node.first_child = Some(child);
                }
            }
        }
    }

    /// Insert a child as the first child of a parent.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        let old_first = self.node(parent).and_then(|n| n.first_child);
        if let Some(child_node) = self.node_mut(child) {
            child_node.parent = Some(parent);
            child_node.next_sibling = old_first;
        }
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.first_child = Some(child);
        }
    }

    /// Insert `new` immediately before `reference` under the same parent.
    ///
    /// Does nothing if `reference` is detached.
    pub fn insert_before(&mut self, reference: NodeId, new: NodeId) {
        let Some(parent) = self.node(reference).and_then(|n| n.parent) else {
            return;
        };

        match self.previous_sibling(reference) {
            Some(prev) => {
                if let Some(prev_node) = self.node_mut(prev) {
                    prev_node.next_sibling = Some(new);
                }
                if let Some(new_node) = self.node_mut(new) {
                    new_node.parent = Some(parent);
                    new_node.next_sibling = Some(reference);
                }
            }
            None => self.prepend_child(parent, new),
        }
    }

    /// Detach a node from its parent. The node and its subtree remain in the
    /// arena but are no longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.node(id) else {
            return;
        };
        let Some(parent) = node.parent else {
            return;
        };
        let next = node.next_sibling;

        match self.previous_sibling(id) {
            Some(prev) => {
                if let Some(prev_node) = self.node_mut(prev) {
                    prev_node.next_sibling = next;
                }
            }
            None => {
                if let Some(parent_node) = self.node_mut(parent) {
                    parent_node.first_child = next;
                }
            }
        }

        if let Some(node) = self.node_mut(id) {
            node.parent = None;
            node.next_sibling = None;
        }
    }

    fn last_child(&self, parent: NodeId) -> Option<NodeId> {
        self.children(parent).last()
    }

    fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id)?.parent?;
        let mut prev = None;
        for child in self.children(parent) {
            if child == id {
                return prev;
            }
            prev = Some(child);
        }
        None
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first_child = self.node(parent).and_then(|n| n.first_child);
        ChildIter {
            document: self,
            current: first_child,
        }
    }

    /// Iterate over all reachable nodes in depth-first order.
    pub fn iter_dfs(&self) -> DfsIter<'_> {
        self.descendants(NodeId::ROOT)
    }

    /// Iterate over `start` and everything below it in depth-first order.
    pub fn descendants(&self, start: NodeId) -> DfsIter<'_> {
        DfsIter {
            document: self,
            stack: vec![start],
        }
    }

    /// Concatenated text of all Text nodes under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node_id in self.descendants(id) {
            if self.role(node_id) == Some(Role::Text) {
                out.push_str(self.node_text(node_id));
            }
        }
        out
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    document: &'a SongDocument,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.document.node(current).and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Depth-first iterator over a subtree.
pub struct DfsIter<'a> {
    document: &'a SongDocument,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DfsIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut children: Vec<NodeId> = self.document.children(current).collect();
        children.reverse();
        self.stack.extend(children);

        Some(current)
    }
}
