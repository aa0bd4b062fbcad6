//! Song tree node types and roles.

/// Unique identifier for a node within a [`SongDocument`](super::SongDocument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);
}

/// Structural role of a node.
///
/// Block roles mirror the generic markup the parser understands. The only
/// song-specific role is [`Role::Chord`], produced by chord recognition.
/// Semantic classification (verse, chorus, ...) is not a role: it lives in
/// the [`SemanticMap`](super::SemanticMap) as style hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Leaf text run. References a range in the document's text buffer.
    #[default]
    Text,
    /// Paragraph (`<p>`). In song files, one lyric stanza.
    Paragraph,
    /// Headings with level 1-6.
    Heading(u8),
    /// Generic block container (`<div>`).
    Container,
    /// Ordered list (`<ol>`).
    OrderedList,
    /// Unordered list (`<ul>`).
    UnorderedList,
    /// Individual list items.
    ListItem,
    /// Block quotes.
    BlockQuote,
    /// Code block (`<pre>`). Its literal text is a single child text run.
    CodeBlock,
    /// Horizontal rule (`<hr>`).
    Rule,
    /// Emphasis (`<em>`).
    Emphasis,
    /// Strong emphasis (`<strong>`).
    Strong,
    /// Inline code span (`<code>`).
    Code,
    /// Hyperlink. href in SemanticMap.
    Link,
    /// Line break inside a paragraph (`<br>`).
    /// Every source newline inside a stanza becomes one of these.
    Break,
    /// Chord annotation. Its text range holds the chord symbol (e.g. `Am7`),
    /// rendered above the lyric without consuming horizontal space.
    Chord,
    /// Root document node.
    Root,
}

impl Role {
    /// Whether this role is a block-level element.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Role::Paragraph
                | Role::Heading(_)
                | Role::Container
                | Role::OrderedList
                | Role::UnorderedList
                | Role::ListItem
                | Role::BlockQuote
                | Role::CodeBlock
                | Role::Rule
                | Role::Root
        )
    }
}

/// Range into the document text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    /// Byte offset into the text buffer.
    pub start: u32,
    /// Length in bytes.
    pub len: u32,
}

impl TextRange {
    /// Create a new text range.
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// Check if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the end offset.
    pub fn end(&self) -> u32 {
        self.start + self.len
    }
}

/// A node in the song tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Structural role.
    pub role: Role,
    /// Parent node (None for root and detached nodes).
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Next sibling node.
    pub next_sibling: Option<NodeId>,
    /// Text content range (Text and Chord nodes).
    pub text: TextRange,
}

impl Node {
    /// Create a new node with default values.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            parent: None,
            first_child: None,
            next_sibling: None,
            text: TextRange::default(),
        }
    }

    /// Create a text node with the given range.
    pub fn text(range: TextRange) -> Self {
        Self {
            text: range,
            ..Self::new(Role::Text)
        }
    }

    /// Create a chord annotation node whose symbol is stored at `range`.
    pub fn chord(range: TextRange) -> Self {
        Self {
            text: range,
            ..Self::new(Role::Chord)
        }
    }
}
