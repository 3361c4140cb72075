use crate::domain::errors::catalog_error::CatalogError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One node of a translation tree: either a display string or a nested table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslationNode {
    Leaf(String),
    Branch(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    #[must_use]
    pub fn empty() -> Self {
        Self::Branch(BTreeMap::new())
    }

    /// Returns the child stored under `segment`, if this node is a branch holding it.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Branch(children) => children.get(segment),
            Self::Leaf(_) => None,
        }
    }

    /// Walks `segments` from this node. `None` as soon as a segment cannot be descended into.
    pub fn descend<'a, I>(&self, segments: I) -> Option<&Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments
            .into_iter()
            .try_fold(self, |cursor, segment| cursor.child(segment))
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Leaf(text) => Value::String(text.clone()),
            Self::Branch(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

/// Converts a parsed catalog file into a tree.
///
/// Numbers and booleans become [`TranslationNode::Leaf`] holding their JSON text, so the
/// original JSON type is not kept: `3` and `"3"` resolve to the same leaf and a rendered
/// subtree shows both as strings. Arrays become branches keyed by index.
impl TryFrom<Value> for TranslationNode {
    type Error = CatalogError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Leaf(text)),
            Value::Number(number) => Ok(Self::Leaf(number.to_string())),
            Value::Bool(flag) => Ok(Self::Leaf(flag.to_string())),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| Ok((index.to_string(), Self::try_from(item)?)))
                .collect::<Result<BTreeMap<_, _>, CatalogError>>()
                .map(Self::Branch),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(key, item)| match Self::try_from(item) {
                    Ok(node) => Ok((key, node)),
                    Err(CatalogError::NullValue { path }) if path.is_empty() => {
                        Err(CatalogError::NullValue { path: key })
                    }
                    Err(CatalogError::NullValue { path }) => Err(CatalogError::NullValue {
                        path: format!("{key}.{path}"),
                    }),
                    Err(other) => Err(other),
                })
                .collect::<Result<BTreeMap<_, _>, CatalogError>>()
                .map(Self::Branch),
            Value::Null => Err(CatalogError::NullValue {
                path: String::new(),
            }),
        }
    }
}

/// Outcome of resolving a translation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Translation<'a> {
    Text(&'a str),
    /// The key stopped on a nested table instead of a display string.
    Subtree(&'a TranslationNode),
    /// Neither the active nor the fallback language knows the key; carries the key itself.
    Missing(&'a str),
}

impl<'a> Translation<'a> {
    #[must_use]
    pub fn from_node(node: &'a TranslationNode) -> Self {
        match node {
            TranslationNode::Leaf(text) => Self::Text(text.as_str()),
            TranslationNode::Branch(_) => Self::Subtree(node),
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// Text shown to the user. Subtrees render as two-space indented JSON.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Text(text) | Self::Missing(text) => (*text).to_string(),
            Self::Subtree(node) => serde_json::to_string_pretty(&node.to_json())
                .unwrap_or_else(|_| String::from("{}")),
        }
    }
}
