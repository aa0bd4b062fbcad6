//! Markdown → song tree.
//!
//! Pipeline: song body → Comrak AST → [`SongDocument`].
//!
//! Every newline inside a paragraph becomes a [`Role::Break`] node, because
//! lyric line structure is significant. Adjacent text fragments are
//! coalesced into a single text run: Comrak splits text at bracket
//! delimiters, and chord recognition needs `[Am]` in one piece. For the same
//! reason a chord directly followed by `(...)`, which Markdown reads as an
//! inline link, is turned back into literal text.

use std::fmt::Write;

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};

use crate::ir::{Node, NodeId, Role, SongDocument};
use crate::transform::find_chords;

/// Parse a Markdown song body into a [`SongDocument`].
pub fn parse_markdown(source: &str) -> SongDocument {
    let arena = Arena::new();
    let options = song_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut doc = SongDocument::new();
    for child in root.children() {
        build_node(child, NodeId::ROOT, &mut doc);
    }
    doc
}

fn song_comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.render.hardbreaks = true;
    options
}

fn build_children<'a>(node: &'a AstNode<'a>, parent: NodeId, doc: &mut SongDocument) {
    for child in node.children() {
        build_node(child, parent, doc);
    }
}

fn build_element<'a>(
    node: &'a AstNode<'a>,
    role: Role,
    parent: NodeId,
    doc: &mut SongDocument,
) -> NodeId {
    let id = doc.alloc_node(Node::new(role));
    doc.append_child(parent, id);
    build_children(node, id, doc);
    id
}

fn build_node<'a>(node: &'a AstNode<'a>, parent: NodeId, doc: &mut SongDocument) {
    let value = node.data.borrow().value.clone();

    match value {
        NodeValue::Document => build_children(node, parent, doc),

        NodeValue::Paragraph => {
            build_element(node, Role::Paragraph, parent, doc);
        }

        NodeValue::Heading(heading) => {
            build_element(node, Role::Heading(heading.level.clamp(1, 6)), parent, doc);
        }

        NodeValue::List(list) => {
            let role = match list.list_type {
                ListType::Ordered => Role::OrderedList,
                ListType::Bullet => Role::UnorderedList,
            };
            build_element(node, role, parent, doc);
        }

        NodeValue::Item(_) => {
            build_element(node, Role::ListItem, parent, doc);
        }

        NodeValue::BlockQuote => {
            build_element(node, Role::BlockQuote, parent, doc);
        }

        NodeValue::CodeBlock(code_block) => {
            let literal = code_block.literal.trim_end_matches('\n');
            let id = doc.alloc_element_with_text(Role::CodeBlock, literal);
            doc.append_child(parent, id);
            let language = code_block.info.split_whitespace().next().unwrap_or("");
            doc.semantics.set_language(id, language);
        }

        NodeValue::ThematicBreak => {
            let id = doc.alloc_node(Node::new(Role::Rule));
            doc.append_child(parent, id);
        }

        NodeValue::Text(text) => push_text(parent, &text, doc),

        NodeValue::SoftBreak | NodeValue::LineBreak => {
            let id = doc.alloc_node(Node::new(Role::Break));
            doc.append_child(parent, id);
        }

        NodeValue::Emph => {
            build_element(node, Role::Emphasis, parent, doc);
        }

        NodeValue::Strong => {
            build_element(node, Role::Strong, parent, doc);
        }

        NodeValue::Code(code) => {
            let id = doc.alloc_element_with_text(Role::Code, &code.literal);
            doc.append_child(parent, id);
        }

        // `[G](oh)` is a chord followed by a parenthesised lyric, not a link.
        NodeValue::Link(link) => match chord_link_text(node) {
            Some(symbol) => {
                let mut literal = format!("[{symbol}]({}", link.url);
                if !link.title.is_empty() {
                    let _ = write!(literal, " \"{}\"", link.title);
                }
                literal.push(')');
                push_text(parent, &literal, doc);
            }
            None => {
                let id = build_element(node, Role::Link, parent, doc);
                doc.semantics.set_href(id, &link.url);
            }
        },

        // Images cannot be printed in a lyric sheet; keep their alt text.
        NodeValue::Image(_) => build_children(node, parent, doc),

        NodeValue::HtmlBlock(_) | NodeValue::HtmlInline(_) => {
            tracing::debug!("dropping raw HTML in song body");
        }

        // Anything else: keep whatever text it contains.
        _ => build_children(node, parent, doc),
    }
}

/// Link text that is exactly one chord symbol, such as the `G` in `[G](oh)`.
fn chord_link_text<'a>(node: &'a AstNode<'a>) -> Option<String> {
    let mut children = node.children();
    let first = children.next()?;
    if children.next().is_some() {
        return None;
    }

    let data = first.data.borrow();
    let NodeValue::Text(text) = &data.value else {
        return None;
    };
    let token = format!("[{text}]");
    match find_chords(&token).as_slice() {
        [span] if span.start == 0 && span.end == token.len() => Some(text.clone()),
        _ => None,
    }
}

/// Append text to `parent`, merging with a trailing text run if present.
fn push_text(parent: NodeId, text: &str, doc: &mut SongDocument) {
    if text.is_empty() {
        return;
    }

    if let Some(last) = doc.children(parent).last()
        && doc.role(last) == Some(Role::Text)
    {
        let merged = format!("{}{}", doc.node_text(last), text);
        let range = doc.append_text(&merged);
        if let Some(node) = doc.node_mut(last) {
            node.text = range;
        }
        return;
    }

    let id = doc.alloc_text(text);
    doc.append_child(parent, id);
}
