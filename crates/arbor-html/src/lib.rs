//! Token-driven tree builder for Arbor documents.
//!
//! # Scope
//!
//! This crate implements:
//! - **Token contract** - the events an upstream tokenizer delivers, both as
//!   [`TokenSink`] callbacks and as serializable [`Token`] values
//! - **Stack of open elements** - the current attachment point and the
//!   bookkeeping for end-tag recovery
//! - **Tree builder** - assembles an [`arbor_dom::Document`], recovering from
//!   mismatched and dangling end tags
//!
//! # Not Implemented
//!
//! - Tokenization of raw markup
//! - Implied tags, foster parenting and foreign content

/// Tree construction.
pub mod builder;
/// Stack of open elements.
pub mod stack;
/// Tokenizer events.
pub mod token;

pub use arbor_dom as dom;
pub use builder::{BuilderConfig, IssueKind, ParseIssue, TokenSink, TreeBuilder};
pub use stack::{OpenElementStack, StackError};
pub use token::{Attribute, Token};
