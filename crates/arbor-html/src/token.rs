use serde::{Deserialize, Serialize};

/// An attribute on a start tag token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name, as written.
    pub name: String,
    /// Attribute value, already unquoted. Empty for bare attributes.
    #[serde(default)]
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One event from an upstream tokenizer.
///
/// Tokens arrive in document order. Character references are already split
/// out of the surrounding text; whitespace has not been filtered.
///
/// In JSON a token is an object tagged by `type`:
///
/// ```json
/// {"type": "start_tag", "name": "a", "attrs": [{"name": "href", "value": "/"}]}
/// {"type": "text", "data": "hello"}
/// {"type": "numeric_entity", "code": "x3c"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    /// `<name attr="value" ...>`
    StartTag {
        /// Tag name, case as received.
        name: String,
        /// Attributes in source order. Repeated names are allowed; the last
        /// one wins.
        #[serde(default)]
        attrs: Vec<Attribute>,
    },
    /// `</name>`
    EndTag {
        /// Tag name, case as received.
        name: String,
    },
    /// Character data between tags.
    Text {
        /// Raw text.
        data: String,
    },
    /// `&name;`
    NamedEntity {
        /// Name without `&` and `;`.
        name: String,
    },
    /// `&#code;`
    NumericEntity {
        /// Digits, with a leading `x` for hexadecimal.
        code: String,
    },
    /// `<!-- data -->`
    Comment {
        /// Comment body without delimiters.
        data: String,
    },
    /// `<!declaration>`
    Doctype {
        /// Declaration text without `<!` and `>`.
        declaration: String,
    },
}

impl Token {
    /// A start tag token from `(name, value)` pairs.
    #[must_use]
    pub fn start_tag<'a>(name: &str, attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::StartTag {
            name: name.to_string(),
            attrs: attrs
                .into_iter()
                .map(|(name, value)| Attribute::new(name, value))
                .collect(),
        }
    }

    /// An end tag token.
    #[must_use]
    pub fn end_tag(name: &str) -> Self {
        Self::EndTag {
            name: name.to_string(),
        }
    }

    /// A text token.
    #[must_use]
    pub fn text(data: &str) -> Self {
        Self::Text {
            data: data.to_string(),
        }
    }

    /// Returns the tag name for start and end tags.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => Some(name),
            _ => None,
        }
    }
}
