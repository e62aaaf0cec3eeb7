//! Shape-preserving collections of query results.
//!
//! A [`Collection`] is a transient, ordered list whose slots hold an element,
//! a nested collection, or nothing. Lifted queries map each slot to a new
//! slot, so the result always has the same length and layout as the input:
//! slot *i* of the output answers the query for slot *i* of the input.

use std::ops::Index;
use std::slice;

use crate::query::ElementRef;

/// One slot of a [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionItem<'a> {
    /// An element of a document.
    Tag(ElementRef<'a>),
    /// A nested collection, e.g. the matches found under one element.
    Nested(Collection<'a>),
    /// An empty slot: a per-slot filter rejected the element that was here.
    Vacant,
}

impl<'a> CollectionItem<'a> {
    /// The element in this slot, if it holds one.
    #[must_use]
    pub const fn as_tag(&self) -> Option<ElementRef<'a>> {
        match self {
            Self::Tag(tag) => Some(*tag),
            _ => None,
        }
    }

    /// The nested collection in this slot, if it holds one.
    #[must_use]
    pub const fn as_nested(&self) -> Option<&Collection<'a>> {
        match self {
            Self::Nested(collection) => Some(collection),
            _ => None,
        }
    }

    /// Whether this slot is empty.
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        matches!(self, Self::Vacant)
    }
}

impl<'a> From<ElementRef<'a>> for CollectionItem<'a> {
    fn from(tag: ElementRef<'a>) -> Self {
        Self::Tag(tag)
    }
}

impl<'a> From<Collection<'a>> for CollectionItem<'a> {
    fn from(collection: Collection<'a>) -> Self {
        Self::Nested(collection)
    }
}

impl<'a> From<Option<ElementRef<'a>>> for CollectionItem<'a> {
    fn from(tag: Option<ElementRef<'a>>) -> Self {
        tag.map_or(Self::Vacant, Self::Tag)
    }
}

/// An ordered, possibly nested list of query results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection<'a> {
    items: Vec<CollectionItem<'a>>,
}

impl<'a> Collection<'a> {
    /// A collection over `items`, in order.
    #[must_use]
    pub const fn new(items: Vec<CollectionItem<'a>>) -> Self {
        Self { items }
    }

    /// Number of top-level slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The slot at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CollectionItem<'a>> {
        self.items.get(index)
    }

    /// Iterate over the top-level slots.
    pub fn iter(&self) -> slice::Iter<'_, CollectionItem<'a>> {
        self.items.iter()
    }

    /// Apply `f` to every slot, keeping order and length.
    #[must_use]
    pub fn map_elementwise<F>(&self, f: F) -> Self
    where
        F: Fn(&CollectionItem<'a>) -> CollectionItem<'a>,
    {
        self.items.iter().map(f).collect()
    }

    /// Map every element slot with `f`, descending into nested collections
    /// with the same mapping. Vacant slots stay vacant.
    fn map_tags<F>(&self, f: &F) -> Self
    where
        F: Fn(ElementRef<'a>) -> CollectionItem<'a>,
    {
        self.map_elementwise(|item| match item {
            CollectionItem::Tag(tag) => f(*tag),
            CollectionItem::Nested(nested) => CollectionItem::Nested(nested.map_tags(f)),
            CollectionItem::Vacant => CollectionItem::Vacant,
        })
    }

    /// For every slot, the collection of its descendants named `name`.
    #[must_use]
    pub fn tags_by_name(&self, name: &str) -> Self {
        self.map_tags(&|tag: ElementRef<'a>| -> CollectionItem<'a> {
            CollectionItem::Nested(tag.tags_by_name(name).collect())
        })
    }

    /// For every slot, the collection of its descendants matching `query`.
    #[must_use]
    pub fn children_matching(&self, query: &str) -> Self {
        self.map_tags(&|tag: ElementRef<'a>| -> CollectionItem<'a> {
            CollectionItem::Nested(tag.children_matching(query).collect())
        })
    }

    /// Keep each element that satisfies `query`, leaving a vacant slot
    /// otherwise. Only the slots themselves are tested, never descendants.
    #[must_use]
    pub fn filter_by_attrs(&self, query: &str) -> Self {
        self.map_tags(&|tag: ElementRef<'a>| -> CollectionItem<'a> {
            tag.filter_by_attrs(query).into()
        })
    }

    /// The first element, searching slots in order (each element checks
    /// itself, then its descendants), whose `id` attribute equals `id`.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<ElementRef<'a>> {
        self.items.iter().find_map(|item| match item {
            CollectionItem::Tag(tag) => tag.element_by_id(id),
            CollectionItem::Nested(nested) => nested.element_by_id(id),
            CollectionItem::Vacant => None,
        })
    }
}

impl<'a> Index<usize> for Collection<'a> {
    type Output = CollectionItem<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> FromIterator<CollectionItem<'a>> for Collection<'a> {
    fn from_iter<I: IntoIterator<Item = CollectionItem<'a>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<ElementRef<'a>> for Collection<'a> {
    fn from_iter<I: IntoIterator<Item = ElementRef<'a>>>(iter: I) -> Self {
        iter.into_iter().map(CollectionItem::Tag).collect()
    }
}

impl<'a> IntoIterator for Collection<'a> {
    type Item = CollectionItem<'a>;
    type IntoIter = std::vec::IntoIter<CollectionItem<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'c, 'a> IntoIterator for &'c Collection<'a> {
    type Item = &'c CollectionItem<'a>;
    type IntoIter = slice::Iter<'c, CollectionItem<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
