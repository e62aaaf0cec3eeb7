//! Rendered-text and raw-markup serialization.
//!
//! Raw markup is pretty-printed: every element's opening and closing tag sit
//! on their own lines and nested content is indented four spaces per level.

use std::fmt::Write as _;
use std::slice;

use crate::document::Document;
use crate::node::{ElementData, NodeId, NodeKind, Render};

const INDENT: &str = "    ";

impl ElementData {
    /// `<name attr="value" ...>` followed by a newline.
    ///
    /// Double quotes inside values are written as `&quot;`.
    #[must_use]
    pub fn start_tag(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.tag_name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
        }
        out.push_str(">\n");
        out
    }

    /// `</name>` followed by a newline, or `None` for void elements.
    #[must_use]
    pub fn end_tag(&self) -> Option<String> {
        (!self.void).then(|| format!("</{}>\n", self.tag_name))
    }
}

/// Pretty-printing sink: every line that is not empty is indented by
/// `depth` levels when its first fragment arrives.
#[derive(Default)]
struct RawWriter {
    out: String,
    depth: usize,
    mid_line: bool,
}

impl RawWriter {
    fn push(&mut self, fragment: &str) {
        for line in fragment.split_inclusive('\n') {
            if !self.mid_line && line != "\n" {
                for _ in 0..self.depth {
                    self.out.push_str(INDENT);
                }
            }
            self.out.push_str(line);
            self.mid_line = !line.ends_with('\n');
        }
    }

    fn end_line(&mut self) {
        if self.mid_line {
            self.push("\n");
        }
    }

    fn close(&mut self, close: Close) {
        match close {
            Close::Nothing => {}
            Close::EndTag(end_tag) => {
                self.end_line();
                self.depth -= 1;
                self.push(&end_tag);
            }
            Close::TextRun { start } if self.out.len() == start => self.push("\n"),
            Close::TextRun { .. } => self.end_line(),
        }
    }
}

/// What to write once a container's children are done.
enum Close {
    Nothing,
    EndTag(String),
    /// A text run always ends its line; `start` is where its output began.
    TextRun { start: usize },
}

/// One open container in a raw-markup walk.
struct Frame<'a> {
    children: slice::Iter<'a, NodeId>,
    close: Close,
}

impl Document {
    /// Decoded text of the whole document.
    #[must_use]
    pub fn text(&self) -> String {
        self.node_text(NodeId::ROOT)
    }

    /// The doctype line (if any) followed by the pretty-printed content.
    #[must_use]
    pub fn raw_html(&self) -> String {
        self.node_raw_html(NodeId::ROOT)
    }

    /// The pretty-printed content without the doctype.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.node_inner_html(NodeId::ROOT)
    }

    /// Decoded text of one node: the concatenation of its descendants' text.
    #[must_use]
    pub fn node_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![slice::from_ref(&id).iter()];
        while let Some(children) = stack.last_mut() {
            let Some(&child) = children.next() else {
                let _ = stack.pop();
                continue;
            };
            let Some(node) = self.get(child) else {
                continue;
            };
            match &node.kind {
                NodeKind::Document | NodeKind::Element(_) | NodeKind::TextRun => {
                    stack.push(node.children.iter());
                }
                NodeKind::Text(text) => text.write_text(&mut out),
                NodeKind::NamedEntity(entity) => entity.write_text(&mut out),
                NodeKind::NumericEntity(entity) => entity.write_text(&mut out),
                NodeKind::Comment(comment) => comment.write_text(&mut out),
            }
        }
        out
    }

    /// Reconstructed markup of one node.
    #[must_use]
    pub fn node_raw_html(&self, id: NodeId) -> String {
        let mut writer = RawWriter::default();
        let mut frames = Vec::new();
        self.open_raw(id, &mut writer, &mut frames);
        self.finish_raw(writer, frames)
    }

    /// Concatenated raw markup of a node's children, unindented.
    #[must_use]
    pub fn node_inner_html(&self, id: NodeId) -> String {
        let frames = vec![Frame {
            children: self.children(id).iter(),
            close: Close::Nothing,
        }];
        self.finish_raw(RawWriter::default(), frames)
    }

    fn finish_raw<'a>(&'a self, mut writer: RawWriter, mut frames: Vec<Frame<'a>>) -> String {
        while let Some(frame) = frames.last_mut() {
            if let Some(&child) = frame.children.next() {
                self.open_raw(child, &mut writer, &mut frames);
            } else if let Some(frame) = frames.pop() {
                writer.close(frame.close);
            }
        }
        writer.out
    }

    /// Write what precedes a node's children, and queue the children.
    fn open_raw<'a>(&'a self, id: NodeId, writer: &mut RawWriter, frames: &mut Vec<Frame<'a>>) {
        let Some(node) = self.get(id) else {
            return;
        };
        let close = match &node.kind {
            NodeKind::Document => {
                if let Some(doctype) = self.doctype() {
                    writer.push(&doctype.raw_html());
                }
                Close::Nothing
            }
            NodeKind::Element(data) => {
                writer.push(&data.start_tag());
                let Some(end_tag) = data.end_tag() else {
                    return;
                };
                writer.depth += 1;
                Close::EndTag(end_tag)
            }
            NodeKind::TextRun => Close::TextRun {
                start: writer.out.len(),
            },
            NodeKind::Text(text) => {
                writer.push(&text.raw_html());
                return;
            }
            NodeKind::NamedEntity(entity) => {
                writer.push(&entity.raw_html());
                return;
            }
            NodeKind::NumericEntity(entity) => {
                writer.push(&entity.raw_html());
                return;
            }
            NodeKind::Comment(comment) => {
                writer.push(&comment.raw_html());
                return;
            }
        };
        frames.push(Frame {
            children: node.children.iter(),
            close,
        });
    }

    /// An indented dump of the tree, one node per line, for debugging.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let root = [NodeId::ROOT];
        let mut stack = vec![root.iter()];
        while let Some(children) = stack.last_mut() {
            let Some(&child) = children.next() else {
                let _ = stack.pop();
                continue;
            };
            let Some(node) = self.get(child) else {
                continue;
            };
            self.write_outline_line(&node.kind, stack.len() - 1, &mut out);
            stack.push(node.children.iter());
        }
        out
    }

    fn write_outline_line(&self, kind: &NodeKind, indent: usize, out: &mut String) {
        let prefix = "  ".repeat(indent);
        match kind {
            NodeKind::Document => {
                let _ = writeln!(out, "{prefix}Document");
                if let Some(doctype) = self.doctype() {
                    let _ = writeln!(out, "{prefix}  <!{}>", doctype.declaration());
                }
            }
            NodeKind::Element(data) => {
                if data.attrs.is_empty() {
                    let _ = writeln!(out, "{prefix}<{}>", data.tag_name);
                } else {
                    let attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    let _ = writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "));
                }
            }
            NodeKind::TextRun => {
                let _ = writeln!(out, "{prefix}#text-run");
            }
            NodeKind::Text(text) => {
                let display = text.raw().replace('\n', "\\n").replace(' ', "\u{00B7}");
                let _ = writeln!(out, "{prefix}\"{display}\"");
            }
            NodeKind::NamedEntity(entity) => {
                let _ = writeln!(out, "{prefix}&{};", entity.name());
            }
            NodeKind::NumericEntity(entity) => {
                let _ = writeln!(out, "{prefix}&#{};", entity.code());
            }
            NodeKind::Comment(comment) => {
                let _ = writeln!(out, "{prefix}<!-- {} -->", comment.body());
            }
        }
    }
}
