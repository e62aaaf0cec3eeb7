//! Tree construction from a token stream.
//!
//! The builder never rejects input. Every recovery it performs (a dropped end
//! tag, an implicitly closed element, an unresolvable character reference) is
//! recorded as a [`ParseIssue`] and the best-effort tree keeps growing.

use std::mem;

use strum_macros::Display;

use arbor_common::warning::warn_once;
use arbor_dom::{
    Comment, Doctype, Document, ElementData, InlineNode, NamedEntity, NodeId, NodeKind,
    NumericEntity, PlainText, VoidElements, is_blank,
};

use crate::stack::OpenElementStack;
use crate::token::{Attribute, Token};

/// Component name used for terminal diagnostics.
const COMPONENT: &str = "Tree Builder";

/// What kind of recovery the builder performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IssueKind {
    /// An end tag with no matching open element was dropped.
    DanglingEndTag,
    /// An element was closed by the end tag of one of its ancestors.
    ImplicitlyClosed,
    /// A named reference was not in the table and was kept as literal text.
    UnknownEntity,
    /// A numeric reference was malformed and was kept as literal text.
    InvalidCodepoint,
}

/// A recovered problem in the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Category of the recovery.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// Index of the offending token among those fed through
    /// [`TokenSink::process`].
    pub token_index: usize,
}

/// Tree builder settings.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Tag names that never take children.
    pub void_elements: VoidElements,
    /// Echo every issue to stderr through the deduplicating warning facility.
    pub report_warnings: bool,
}

impl BuilderConfig {
    /// Default settings: the HTML void elements, issues recorded silently.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom void element set.
    #[must_use]
    pub fn with_void_elements(mut self, void_elements: VoidElements) -> Self {
        self.void_elements = void_elements;
        self
    }

    /// Turn terminal warnings on or off.
    #[must_use]
    pub const fn with_report_warnings(mut self, report_warnings: bool) -> Self {
        self.report_warnings = report_warnings;
        self
    }
}

/// Receiver of tokenizer events, in document order.
pub trait TokenSink {
    /// `<name attrs...>`
    fn on_start_tag(&mut self, name: &str, attrs: &[Attribute]);

    /// `</name>`
    fn on_end_tag(&mut self, name: &str);

    /// Character data, whitespace not yet filtered.
    fn on_text(&mut self, data: &str);

    /// `&name;`
    fn on_named_entity(&mut self, name: &str);

    /// `&#code;`
    fn on_numeric_entity(&mut self, code: &str);

    /// `<!-- data -->`
    fn on_comment(&mut self, data: &str);

    /// `<!declaration>`
    fn on_doctype(&mut self, declaration: &str);

    /// Dispatch `token` to the matching callback.
    fn process(&mut self, token: &Token) {
        dispatch(self, token);
    }
}

fn dispatch<S: TokenSink + ?Sized>(sink: &mut S, token: &Token) {
    match token {
        Token::StartTag { name, attrs } => sink.on_start_tag(name, attrs),
        Token::EndTag { name } => sink.on_end_tag(name),
        Token::Text { data } => sink.on_text(data),
        Token::NamedEntity { name } => sink.on_named_entity(name),
        Token::NumericEntity { code } => sink.on_numeric_entity(code),
        Token::Comment { data } => sink.on_comment(data),
        Token::Doctype { declaration } => sink.on_doctype(declaration),
    }
}

/// Builds a [`Document`] from tokenizer events.
///
/// New nodes attach to the current node of the open-element stack. End tags
/// only unwind that stack: elements closed implicitly keep the children they
/// already received.
///
/// # Example
///
/// ```
/// use arbor_html::{Token, TokenSink, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// builder.process(&Token::start_tag("p", [("class", "note")]));
/// builder.process(&Token::text("hi"));
/// builder.process(&Token::end_tag("p"));
///
/// let document = builder.take_document().unwrap();
/// assert_eq!(document.text(), "hi");
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    document: Document,
    stack: OpenElementStack,
    config: BuilderConfig,
    issues: Vec<ParseIssue>,
    token_index: usize,
}

impl TreeBuilder {
    /// A builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// A builder with custom settings.
    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        let mut builder = Self {
            document: Document::new(),
            stack: OpenElementStack::new(),
            config,
            issues: Vec::new(),
            token_index: 0,
        };
        builder.reset_stack();
        builder
    }

    /// The active settings.
    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The tree built so far.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The stack of open elements.
    #[must_use]
    pub const fn stack(&self) -> &OpenElementStack {
        &self.stack
    }

    /// Issues recorded since the last reset.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Move the recorded issues out, leaving none behind.
    pub fn take_issues(&mut self) -> Vec<ParseIssue> {
        mem::take(&mut self.issues)
    }

    /// Return the finished document and start a fresh one.
    ///
    /// The stack is cleared and re-seeded with the new root, and recorded
    /// issues are dropped. Returns `None` only if the stack lost its root,
    /// which the token callbacks never cause.
    pub fn take_document(&mut self) -> Option<Document> {
        let had_root = self.stack.root().is_ok();
        let document = mem::take(&mut self.document);
        self.reset_stack();
        self.issues.clear();
        self.token_index = 0;
        had_root.then_some(document)
    }

    /// Feed every token, then take the finished document together with the
    /// issues recorded while building it.
    pub fn parse_tokens<'t, I>(&mut self, tokens: I) -> (Document, Vec<ParseIssue>)
    where
        I: IntoIterator<Item = &'t Token>,
    {
        for token in tokens {
            self.process(token);
        }
        let issues = self.take_issues();
        let document = self.take_document().unwrap_or_default();
        (document, issues)
    }

    fn reset_stack(&mut self) {
        self.stack.clear();
        let _ = self.stack.push(NodeId::ROOT, &NodeKind::Document);
    }

    /// The node new content attaches to.
    fn current(&self) -> NodeId {
        self.stack.current().unwrap_or(NodeId::ROOT)
    }

    fn record(&mut self, kind: IssueKind, message: String) {
        if self.config.report_warnings {
            warn_once(COMPONENT, &message);
        }
        self.issues.push(ParseIssue {
            kind,
            message,
            token_index: self.token_index,
        });
    }

    fn insert_inline(&mut self, leaf: InlineNode) {
        let parent = self.current();
        let _ = self.document.append_inline(parent, leaf);
    }

    /// Pop until the current node is `name`, then pop it too.
    ///
    /// The caller has already checked that `name` is open. The root entry has
    /// no name, so the walk stops there at the latest.
    fn close_element(&mut self, name: &str) {
        while let Some(current) = self.stack.current_name() {
            if current == name {
                let _ = self.stack.pop();
                return;
            }
            let message = format!("<{current}> implicitly closed by </{name}>");
            let _ = self.stack.pop();
            self.record(IssueKind::ImplicitlyClosed, message);
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSink for TreeBuilder {
    fn on_start_tag(&mut self, name: &str, attrs: &[Attribute]) {
        let data = ElementData::new(
            name,
            attrs
                .iter()
                .map(|attr| (attr.name.clone(), attr.value.clone())),
            &self.config.void_elements,
        );
        let parent = self.current();
        let id = self.document.alloc(NodeKind::Element(data));
        self.document.append_child(parent, id);
        if let Some(node) = self.document.get(id) {
            let _ = self.stack.push(id, &node.kind);
        }
    }

    fn on_end_tag(&mut self, name: &str) {
        if !self.stack.contains(name) {
            self.record(
                IssueKind::DanglingEndTag,
                format!("dropped end tag </{name}> with no open element"),
            );
            return;
        }
        self.close_element(name);
    }

    fn on_text(&mut self, data: &str) {
        if is_blank(data) {
            return;
        }
        self.insert_inline(PlainText::new(data).into());
    }

    fn on_named_entity(&mut self, name: &str) {
        let leaf: InlineNode = match NamedEntity::new(name) {
            Ok(entity) => entity.into(),
            Err(err) => {
                self.record(IssueKind::UnknownEntity, err.to_string());
                PlainText::new(&format!("&{name};")).into()
            }
        };
        self.insert_inline(leaf);
    }

    fn on_numeric_entity(&mut self, code: &str) {
        let leaf: InlineNode = match NumericEntity::new(code) {
            Ok(entity) => entity.into(),
            Err(err) => {
                self.record(IssueKind::InvalidCodepoint, err.to_string());
                PlainText::new(&format!("&#{code};")).into()
            }
        };
        self.insert_inline(leaf);
    }

    fn on_comment(&mut self, data: &str) {
        let parent = self.current();
        let id = self.document.alloc(NodeKind::Comment(Comment::new(data)));
        self.document.append_child(parent, id);
    }

    fn on_doctype(&mut self, declaration: &str) {
        self.document.set_doctype(Doctype::new(declaration));
    }

    fn process(&mut self, token: &Token) {
        dispatch(self, token);
        self.token_index += 1;
    }
}
