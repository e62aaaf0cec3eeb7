//! Document tree for the Arbor tree builder.
//!
//! This crate provides an arena-based document model, its pretty-printing
//! serializer, and a small query algebra over elements and collections.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships. A parent owns its children through an ordered list of IDs;
//! anything else that needs to point into the tree (the tree builder's stack of
//! open elements, query handles) holds IDs or shared borrows, never a second
//! owner.
//!
//! Adjacent inline content (text and character references) is coalesced under
//! a single [`NodeKind::TextRun`] so serialization can treat a run of inline
//! content as one block.
//!
//! # Scope
//!
//! - **Entity resolution** - named and numeric character references
//! - **Node model** - document, element, text run, text, entities, comment, doctype
//! - **Serialization** - rendered text and indented raw markup
//! - **Queries** - tag-name, attribute and id lookups over elements and
//!   shape-preserving [`Collection`]s

/// Attribute query strings (`name=value; ...`).
pub mod attr_query;
/// Shape-preserving collections of query results.
pub mod collection;
/// The document arena.
pub mod document;
/// Character reference lookup.
pub mod entities;
/// Errors raised by node construction and query parsing.
pub mod error;
/// Node variants.
pub mod node;
/// Element handles and tree walks.
pub mod query;
/// Rendered text and raw markup.
mod serialize;

pub use attr_query::{AttrClause, AttrQuery};
pub use collection::{Collection, CollectionItem};
pub use document::Document;
pub use entities::{resolve_named, resolve_numeric};
pub use error::DomError;
pub use node::{
    AttributesMap, Comment, DEFAULT_VOID_ELEMENTS, Doctype, ElementData, InlineNode, NamedEntity,
    Node, NodeId, NodeKind, NumericEntity, PlainText, Render, VoidElements, is_blank,
    is_html_space,
};
pub use query::{AllTags, ChildrenTags, ElementRef};
