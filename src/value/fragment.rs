//! Typed fragments of a CSS-like value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a [`ValueFragment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// A bare token such as `10px`, `#fff`, `solid` or `$var`.
    Word,
    /// A quoted string; the payload excludes the quotes.
    String,
    /// `name(...)`, or `(...)` with an empty name.
    Function,
    Space,
    /// A separator: `,`, `/` or `:`.
    Div,
    Comment,
}

impl FragmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FragmentKind::Word => "word",
            FragmentKind::String => "string",
            FragmentKind::Function => "function",
            FragmentKind::Space => "space",
            FragmentKind::Div => "div",
            FragmentKind::Comment => "comment",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of a parsed value.
///
/// Function fragments carry their arguments in `nodes`; every other kind
/// leaves it empty.
///
/// Fragments deserialize from the `{ "type": ..., "value": ... }` shape used
/// by JavaScript value parsers:
///
/// ```rust
/// use frontlint::{FragmentKind, ValueFragment};
///
/// let fragment: ValueFragment =
///     serde_json::from_str(r#"{ "type": "word", "value": "10px" }"#).unwrap();
/// assert_eq!(fragment, ValueFragment::word("10px"));
/// assert_eq!(fragment.kind, FragmentKind::Word);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFragment {
    #[serde(rename = "type")]
    pub kind: FragmentKind,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<ValueFragment>,
}

impl ValueFragment {
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            nodes: Vec::new(),
        }
    }

    pub fn word(value: impl Into<String>) -> Self {
        Self::new(FragmentKind::Word, value)
    }

    pub fn function(name: impl Into<String>, nodes: Vec<ValueFragment>) -> Self {
        Self {
            kind: FragmentKind::Function,
            value: name.into(),
            nodes,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == FragmentKind::Word
    }
}
