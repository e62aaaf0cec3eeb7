//! Read-only navigation over a finished document.
//!
//! Every search walks elements only; text runs and comments never contain
//! tags, so whole subtrees of inline content are skipped.

use std::fmt;
use std::ptr;
use std::slice;

use crate::attr_query::AttrQuery;
use crate::document::Document;
use crate::node::{AttributesMap, ElementData, NodeId};

/// A borrowed handle to one element of a [`Document`].
///
/// Handles are `Copy`; two handles are equal when they point at the same node
/// of the same document.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    document: &'a Document,
    id: NodeId,
    data: &'a ElementData,
}

impl<'a> ElementRef<'a> {
    /// A handle for `id`, or `None` if that node is not an element.
    #[must_use]
    pub fn new(document: &'a Document, id: NodeId) -> Option<Self> {
        document
            .as_element(id)
            .map(|data| Self { document, id, data })
    }

    /// The node ID inside the owning document.
    #[must_use]
    pub const fn id(self) -> NodeId {
        self.id
    }

    /// The owning document.
    #[must_use]
    pub const fn document(self) -> &'a Document {
        self.document
    }

    /// The element's data.
    #[must_use]
    pub const fn data(self) -> &'a ElementData {
        self.data
    }

    /// The tag name, case as received.
    #[must_use]
    pub fn tag_name(self) -> &'a str {
        &self.data.tag_name
    }

    /// All attributes in source order.
    #[must_use]
    pub const fn attrs(self) -> &'a AttributesMap {
        &self.data.attrs
    }

    /// The value of attribute `name`, if present.
    #[must_use]
    pub fn attr(self, name: &str) -> Option<&'a str> {
        self.data.attr(name)
    }

    /// The `id` attribute, if present.
    #[must_use]
    pub fn id_attr(self) -> Option<&'a str> {
        self.data.id()
    }

    /// Class names from the `class` attribute.
    pub fn classes(self) -> impl Iterator<Item = &'a str> {
        self.data.classes()
    }

    /// Whether this is a void element.
    #[must_use]
    pub const fn is_void(self) -> bool {
        self.data.void
    }

    /// The enclosing element, or `None` at the top level.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.document
            .parent(self.id)
            .and_then(|parent| Self::new(self.document, parent))
    }

    /// Decoded text content.
    #[must_use]
    pub fn text(self) -> String {
        self.document.node_text(self.id)
    }

    /// Pretty-printed markup of the element and its content.
    #[must_use]
    pub fn raw_html(self) -> String {
        self.document.node_raw_html(self.id)
    }

    /// Raw markup of the children, unindented.
    #[must_use]
    pub fn inner_html(self) -> String {
        self.document.node_inner_html(self.id)
    }

    /// See [`ElementData::start_tag`].
    #[must_use]
    pub fn start_tag(self) -> String {
        self.data.start_tag()
    }

    /// See [`ElementData::end_tag`].
    #[must_use]
    pub fn end_tag(self) -> Option<String> {
        self.data.end_tag()
    }

    /// See [`ElementData::check_attr`].
    #[must_use]
    pub fn check_attr(self, name: &str, value: &str) -> bool {
        self.data.check_attr(name, value)
    }

    /// See [`ElementData::check_attrs`].
    #[must_use]
    pub fn check_attrs(self, query: &str) -> bool {
        self.data.check_attrs(query)
    }

    /// Direct element children.
    #[must_use]
    pub fn children_tags(self) -> ChildrenTags<'a> {
        ChildrenTags::new(self.document, self.id)
    }

    /// Every descendant element, depth-first pre-order, excluding `self`.
    #[must_use]
    pub fn all_tags(self) -> AllTags<'a> {
        AllTags::new(self.document, self.id)
    }

    /// Descendant elements whose tag name equals `name` exactly.
    pub fn tags_by_name(self, name: &str) -> impl Iterator<Item = ElementRef<'a>> {
        self.all_tags().filter(move |tag| tag.tag_name() == name)
    }

    /// Descendant elements, at any depth, that satisfy `query`.
    ///
    /// `self` is not considered; use [`Self::filter_by_attrs`] for that.
    pub fn children_matching(self, query: &str) -> impl Iterator<Item = ElementRef<'a>> {
        matching(self.all_tags(), query)
    }

    /// `self` if its `id` attribute equals `id`, otherwise the first
    /// descendant in document order that has it.
    #[must_use]
    pub fn element_by_id(self, id: &str) -> Option<Self> {
        if self.check_attr("id", id) {
            return Some(self);
        }
        self.all_tags().find(|tag| tag.check_attr("id", id))
    }

    /// `self` if it satisfies `query`. Descendants are not examined.
    #[must_use]
    pub fn filter_by_attrs(self, query: &str) -> Option<Self> {
        self.check_attrs(query).then_some(self)
    }
}

fn matching<'a>(tags: AllTags<'a>, query: &str) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
    let query = query.parse::<AttrQuery>().ok();
    tags.filter(move |tag| query.as_ref().is_some_and(|query| query.matches(tag.data)))
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl Eq for ElementRef<'_> {}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("tag_name", &self.data.tag_name)
            .field("attrs", &self.data.attrs)
            .finish()
    }
}

/// Iterator over the element children of one node.
pub struct ChildrenTags<'a> {
    document: &'a Document,
    children: slice::Iter<'a, NodeId>,
}

impl<'a> ChildrenTags<'a> {
    fn new(document: &'a Document, parent: NodeId) -> Self {
        Self {
            document,
            children: document.children(parent).iter(),
        }
    }
}

impl<'a> Iterator for ChildrenTags<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let document = self.document;
        self.children.find_map(|&child| ElementRef::new(document, child))
    }
}

/// Depth-first, pre-order iterator over the descendant elements of one node.
///
/// Each level of the walk keeps its own child iterator, so the traversal is
/// lazy and never revisits a node.
pub struct AllTags<'a> {
    document: &'a Document,
    levels: Vec<slice::Iter<'a, NodeId>>,
}

impl<'a> AllTags<'a> {
    fn new(document: &'a Document, parent: NodeId) -> Self {
        Self {
            document,
            levels: vec![document.children(parent).iter()],
        }
    }
}

impl<'a> Iterator for AllTags<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.levels.last_mut()?;
            match level.next() {
                Some(&child) => {
                    if let Some(tag) = ElementRef::new(self.document, child) {
                        self.levels.push(self.document.children(child).iter());
                        return Some(tag);
                    }
                }
                None => {
                    let _ = self.levels.pop();
                }
            }
        }
    }
}

impl Document {
    /// Element children of the root.
    #[must_use]
    pub fn children_tags(&self) -> ChildrenTags<'_> {
        ChildrenTags::new(self, NodeId::ROOT)
    }

    /// Every element in the document, depth-first pre-order.
    #[must_use]
    pub fn all_tags(&self) -> AllTags<'_> {
        AllTags::new(self, NodeId::ROOT)
    }

    /// Elements whose tag name equals `name` exactly.
    pub fn tags_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
        self.all_tags().filter(move |tag| tag.tag_name() == name)
    }

    /// Elements that satisfy `query`.
    pub fn children_matching<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        matching(self.all_tags(), query)
    }

    /// The first element in document order whose `id` attribute equals `id`.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.all_tags().find(|tag| tag.check_attr("id", id))
    }
}
