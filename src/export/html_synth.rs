//! HTML Synthesizer - converts a song tree to HTML markup.
//!
//! This module walks the tree and emits HTML tags, turning style hints into
//! `class` attributes. Chord annotations become `<span class="chord">`
//! elements that the stylesheet floats above the lyric line.
//!
//! # Example
//!
//! ```
//! use songprint::export::synthesize_html;
//! use songprint::parse::parse_song;
//! use songprint::transform::transform_song;
//!
//! let mut song = parse_song("title: Habits\n\nI [Am]eat my dinner\n");
//! transform_song(&mut song.document, &song.meta);
//! let html = synthesize_html(&song.document);
//!
//! assert!(html.contains(r#"<h1 class="song-title">Habits</h1>"#));
//! assert!(html.contains(r#"<span class="chord">Am</span>"#));
//! ```

use std::fmt::Write;

use quick_xml::escape::{escape, partial_escape};

use crate::ir::{NodeId, Role, SongDocument};

use super::stylesheet::Stylesheet;

/// Synthesize HTML body markup from a song tree.
pub fn synthesize_html(doc: &SongDocument) -> String {
    let mut ctx = SynthesisContext {
        out: String::new(),
        doc,
        indent_level: 0,
    };

    // Walk children of root (skip the root node itself)
    for child_id in doc.children(NodeId::ROOT) {
        walk_node(child_id, &mut ctx);
    }

    ctx.out
}

/// Wrap body markup in a complete HTML5 document with an embedded stylesheet.
pub fn synthesize_html_document(body: &str, title: &str, stylesheet: Option<&Stylesheet>) -> String {
    let mut doc = String::new();

    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\"/>\n  <title>");
    doc.push_str(&partial_escape(title));
    doc.push_str("</title>\n");

    if let Some(stylesheet) = stylesheet {
        doc.push_str("  <style>\n");
        doc.push_str(stylesheet.as_str());
        if !stylesheet.as_str().ends_with('\n') {
            doc.push('\n');
        }
        doc.push_str("  </style>\n");
    }

    doc.push_str("</head>\n<body>\n");
    doc.push_str(body);
    doc.push_str("</body>\n</html>\n");
    doc
}

/// Context for the synthesis walk.
struct SynthesisContext<'a> {
    out: String,
    doc: &'a SongDocument,
    indent_level: usize,
}

impl SynthesisContext<'_> {
    fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.out.push_str("  ");
        }
    }
}

/// Walk a node and emit its HTML.
fn walk_node(id: NodeId, ctx: &mut SynthesisContext) {
    let Some(node) = ctx.doc.node(id) else {
        return;
    };
    let role = node.role;

    if role == Role::Text {
        ctx.out.push_str(&partial_escape(ctx.doc.node_text(id)));
        return;
    }

    let (tag, is_void, is_block) = role_to_tag(role);

    // Build attributes
    let mut attrs = String::new();
    if let Some(class) = ctx.doc.semantics.class_attr(id) {
        let _ = write!(attrs, " class=\"{}\"", escape(class.as_str()));
    }
    if let Some(href) = ctx.doc.semantics.href(id) {
        let _ = write!(attrs, " href=\"{}\"", escape(href));
    }
    if role == Role::CodeBlock
        && let Some(language) = ctx.doc.semantics.language(id)
    {
        let _ = write!(attrs, " data-lang=\"{}\"", escape(language));
    }

    if is_block {
        ctx.indent();
    }

    if is_void {
        let _ = write!(ctx.out, "<{tag}{attrs}/>");
        if is_block || role == Role::Break {
            ctx.out.push('\n');
        }
        return;
    }

    let _ = write!(ctx.out, "<{tag}{attrs}>");

    if role == Role::Chord {
        ctx.out.push_str(&partial_escape(ctx.doc.node_text(id)));
        ctx.out.push_str("</span>");
        return;
    }

    // Only blocks whose children are blocks get their own indented lines.
    let has_block_children = ctx
        .doc
        .children(id)
        .any(|child| ctx.doc.role(child).is_some_and(Role::is_block));

    if has_block_children {
        ctx.out.push('\n');
        ctx.indent_level += 1;
    }

    for child_id in ctx.doc.children(id) {
        walk_node(child_id, ctx);
    }

    if has_block_children {
        ctx.indent_level -= 1;
        ctx.indent();
    }
    let _ = write!(ctx.out, "</{tag}>");

    if is_block {
        ctx.out.push('\n');
    }
}

/// Map a Role to an HTML tag name.
///
/// Returns (tag_name, is_void_element, is_block_element).
fn role_to_tag(role: Role) -> (&'static str, bool, bool) {
    match role {
        Role::Root | Role::Container => ("div", false, true),
        Role::Paragraph => ("p", false, true),
        Role::Text => ("span", false, false),

        Role::Heading(1) => ("h1", false, true),
        Role::Heading(2) => ("h2", false, true),
        Role::Heading(3) => ("h3", false, true),
        Role::Heading(4) => ("h4", false, true),
        Role::Heading(5) => ("h5", false, true),
        Role::Heading(_) => ("h6", false, true),

        Role::BlockQuote => ("blockquote", false, true),
        Role::OrderedList => ("ol", false, true),
        Role::UnorderedList => ("ul", false, true),
        Role::ListItem => ("li", false, true),
        Role::CodeBlock => ("pre", false, true),

        Role::Break => ("br", true, false),
        Role::Rule => ("hr", true, true),

        Role::Emphasis => ("em", false, false),
        Role::Strong => ("strong", false, false),
        Role::Code => ("code", false, false),
        Role::Link => ("a", false, false),
        Role::Chord => ("span", false, false),
    }
}
