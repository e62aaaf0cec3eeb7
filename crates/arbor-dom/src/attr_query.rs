//! The attribute query mini-language.
//!
//! A query is a `;`-separated list of `name=value` clauses, e.g.
//! `class=item; data-kind=link`. An element matches when every clause holds.
//!
//! Parsing is deliberately simple: split on `;`, trim, split at the first `=`,
//! trim both halves. Values cannot contain `;`, quoting is not recognised.

use std::str::FromStr;

use crate::error::DomError;
use crate::node::ElementData;

/// One `name=value` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrClause {
    /// Attribute name.
    pub name: String,
    /// Expected value (or class token, for `class`).
    pub value: String,
}

/// A parsed attribute query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrQuery {
    clauses: Vec<AttrClause>,
}

impl AttrQuery {
    /// Clauses in evaluation order.
    #[must_use]
    pub fn clauses(&self) -> &[AttrClause] {
        &self.clauses
    }

    /// Check every clause against `element`, stopping at the first failure.
    ///
    /// A query with no clauses matches every element.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        self.clauses
            .iter()
            .all(|clause| element.check_attr(&clause.name, &clause.value))
    }
}

impl FromStr for AttrQuery {
    type Err = DomError;

    fn from_str(query: &str) -> Result<Self, Self::Err> {
        let clauses = query
            .split(';')
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .map(|clause| {
                let (name, value) = clause
                    .split_once('=')
                    .ok_or_else(|| DomError::MalformedQuery(clause.to_string()))?;
                Ok::<_, DomError>(AttrClause {
                    name: name.trim().to_string(),
                    value: value.trim().to_string(),
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { clauses })
    }
}

impl ElementData {
    /// Check a whole query string.
    ///
    /// A malformed query matches nothing.
    #[must_use]
    pub fn check_attrs(&self, query: &str) -> bool {
        query
            .parse::<AttrQuery>()
            .is_ok_and(|query| query.matches(self))
    }
}
