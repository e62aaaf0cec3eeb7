//! Node variants stored in a [`Document`](crate::Document).
//!
//! Containers (`Document`, `Element`, `TextRun`) live in the arena and refer to
//! their children by [`NodeId`]. Leaves carry their decoded text and enough of
//! the original markup to reproduce it.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::entities::{resolve_named, resolve_numeric};
use crate::error::DomError;

/// Map of attribute names to values for an element.
///
/// Iteration follows the order attributes appeared in the start tag.
pub type AttributesMap = IndexMap<String, String>;

/// Tag names that never have children or a closing tag.
pub const DEFAULT_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Characters that count as whitespace in text content: space, tab, line
/// feed and no-break space. A carriage return is ordinary text.
#[must_use]
pub const fn is_html_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{00A0}')
}

/// Returns true if `data` has no visible characters.
#[must_use]
pub fn is_blank(data: &str) -> bool {
    data.chars().all(is_html_space)
}

/// Collapse every run of whitespace into a single space.
fn collapse_whitespace(data: &str) -> String {
    let mut out = String::with_capacity(data.len());
    let mut in_space = false;
    for c in data.chars() {
        if is_html_space(c) {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// A type-safe index into a document's node arena.
///
/// `NodeId` provides O(1) access to any node without holding a borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// One slot in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node is.
    pub kind: NodeKind,
    /// The container that owns this node; `None` for the root.
    pub parent: Option<NodeId>,
    /// Owned children in document order. Empty for leaves.
    pub children: Vec<NodeId>,
}

impl Node {
    pub(crate) const fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The closed set of node variants.
///
/// The doctype is not stored in the arena; it hangs off the
/// [`Document`](crate::Document) directly.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The root of the tree.
    Document,
    /// A tag with attributes and (unless void) children.
    Element(ElementData),
    /// A container coalescing adjacent inline leaves.
    TextRun,
    /// Character data.
    Text(PlainText),
    /// A resolved `&name;` reference.
    NamedEntity(NamedEntity),
    /// A resolved `&#num;` reference.
    NumericEntity(NumericEntity),
    /// A comment; invisible in rendered text.
    Comment(Comment),
}

impl NodeKind {
    /// Inline leaves are the nodes that get coalesced into a [`NodeKind::TextRun`].
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Text(_) | Self::NamedEntity(_) | Self::NumericEntity(_)
        )
    }

    /// Whether block-level children (elements, comments, runs) can be attached.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        match self {
            Self::Document => true,
            Self::Element(data) => !data.void,
            _ => false,
        }
    }

    /// Element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }
}

/// An inline leaf, the only kind of node that may be coalesced.
#[derive(Debug, Clone)]
pub enum InlineNode {
    /// Character data.
    Text(PlainText),
    /// A resolved `&name;` reference.
    NamedEntity(NamedEntity),
    /// A resolved `&#num;` reference.
    NumericEntity(NumericEntity),
}

impl From<InlineNode> for NodeKind {
    fn from(node: InlineNode) -> Self {
        match node {
            InlineNode::Text(text) => Self::Text(text),
            InlineNode::NamedEntity(entity) => Self::NamedEntity(entity),
            InlineNode::NumericEntity(entity) => Self::NumericEntity(entity),
        }
    }
}

impl From<PlainText> for InlineNode {
    fn from(text: PlainText) -> Self {
        Self::Text(text)
    }
}

impl From<NamedEntity> for InlineNode {
    fn from(entity: NamedEntity) -> Self {
        Self::NamedEntity(entity)
    }
}

impl From<NumericEntity> for InlineNode {
    fn from(entity: NumericEntity) -> Self {
        Self::NumericEntity(entity)
    }
}

/// Rendering contract shared by every leaf.
pub trait Render {
    /// Append the decoded, human-readable form.
    fn write_text(&self, out: &mut String);

    /// Append the reconstructed markup.
    fn write_raw(&self, out: &mut String);

    /// The decoded, human-readable form.
    fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    /// The reconstructed markup.
    fn raw_html(&self) -> String {
        let mut out = String::new();
        self.write_raw(&mut out);
        out
    }
}

/// Character data, with whitespace collapsed for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText {
    raw: String,
    collapsed: String,
}

impl PlainText {
    /// Wrap `data`; the rendered form is computed once here.
    #[must_use]
    pub fn new(data: &str) -> Self {
        Self {
            raw: data.to_string(),
            collapsed: collapse_whitespace(data),
        }
    }

    /// The text exactly as it was received.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl Render for PlainText {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.collapsed);
    }

    fn write_raw(&self, out: &mut String) {
        out.push_str(&self.raw);
    }
}

/// A named character reference such as `&lt;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    name: String,
    value: &'static str,
}

impl NamedEntity {
    /// Resolve `name` (without `&` and `;`).
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownEntity`] if the name is not in the table.
    pub fn new(name: &str) -> Result<Self, DomError> {
        Ok(Self {
            name: name.to_string(),
            value: resolve_named(name)?,
        })
    }

    /// The entity name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Render for NamedEntity {
    fn write_text(&self, out: &mut String) {
        out.push_str(self.value);
    }

    fn write_raw(&self, out: &mut String) {
        out.push('&');
        out.push_str(&self.name);
        out.push(';');
    }
}

/// A numeric character reference such as `&#60;` or `&#x3c;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericEntity {
    code: String,
    value: char,
}

impl NumericEntity {
    /// Resolve `code`, the text between `&#` and `;`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidCodepoint`] if the numeral is malformed or
    /// not a Unicode scalar value.
    pub fn new(code: &str) -> Result<Self, DomError> {
        Ok(Self {
            code: code.to_string(),
            value: resolve_numeric(code)?,
        })
    }

    /// The digits as written, including any `x` prefix.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The decoded character.
    #[must_use]
    pub const fn value(&self) -> char {
        self.value
    }
}

impl Render for NumericEntity {
    fn write_text(&self, out: &mut String) {
        out.push(self.value);
    }

    fn write_raw(&self, out: &mut String) {
        out.push_str("&#");
        out.push_str(&self.code);
        out.push(';');
    }
}

/// `<!-- body -->`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    body: String,
}

impl Comment {
    /// A comment holding `body` (without the `<!--`/`-->` delimiters).
    #[must_use]
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }

    /// The comment text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Render for Comment {
    fn write_text(&self, _out: &mut String) {}

    fn write_raw(&self, out: &mut String) {
        out.push_str("<!-- ");
        out.push_str(&self.body);
        out.push_str(" -->\n");
    }
}

/// `<!declaration>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctype {
    declaration: String,
}

impl Doctype {
    /// A doctype holding `declaration` (without `<!` and `>`).
    #[must_use]
    pub fn new(declaration: &str) -> Self {
        Self {
            declaration: declaration.to_string(),
        }
    }

    /// The raw declaration text, e.g. `DOCTYPE html`.
    #[must_use]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }
}

impl Render for Doctype {
    fn write_text(&self, _out: &mut String) {}

    fn write_raw(&self, out: &mut String) {
        out.push_str("<!");
        out.push_str(&self.declaration);
        out.push_str(">\n");
    }
}

/// The set of tag names treated as void.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidElements {
    names: HashSet<String>,
}

impl VoidElements {
    /// A custom set. Names are matched ASCII-case-insensitively.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether `tag_name` is void.
    #[must_use]
    pub fn contains(&self, tag_name: &str) -> bool {
        self.names.contains(&tag_name.to_ascii_lowercase())
    }
}

impl Default for VoidElements {
    fn default() -> Self {
        Self::from_names(DEFAULT_VOID_ELEMENTS)
    }
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The tag name, case as received.
    pub tag_name: String,
    /// Attributes in source order, keys unique.
    pub attrs: AttributesMap,
    /// Void elements never get children or a closing tag.
    pub void: bool,
}

impl ElementData {
    /// Build element data from a start tag.
    ///
    /// Repeated attribute names keep their first position and the last value.
    pub fn new<I>(tag_name: &str, attrs: I, void_elements: &VoidElements) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut map = AttributesMap::new();
        for (name, value) in attrs {
            let _ = map.insert(name, value);
        }
        Self {
            tag_name: tag_name.to_string(),
            attrs: map,
            void: void_elements.contains(tag_name),
        }
    }

    /// The value of attribute `name`, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Class names from the class attribute, in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    /// Test one `name=value` condition.
    ///
    /// `class` is multi-valued: `value` must equal one of its
    /// whitespace-separated tokens. Every other attribute compares exactly.
    #[must_use]
    pub fn check_attr(&self, name: &str, value: &str) -> bool {
        match self.attr(name) {
            None => false,
            Some(_) if name == "class" => self.classes().any(|class| class == value),
            Some(actual) => actual == value,
        }
    }
}
