//! Errors raised while constructing nodes or parsing attribute queries.

use thiserror::Error;

/// Failure to build a node or to interpret a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// A named character reference that is not in the entity table.
    #[error("unknown named entity `&{0};`")]
    UnknownEntity(String),

    /// A numeric character reference that is not a valid numeral or does
    /// not name a Unicode scalar value.
    #[error("invalid numeric character reference `&#{0};`")]
    InvalidCodepoint(String),

    /// An attribute query clause without a `=` separator.
    #[error("malformed attribute query clause `{0}`")]
    MalformedQuery(String),
}
