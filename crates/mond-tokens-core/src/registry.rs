//! # Registry Module
//!
//! Flattened primitive tokens for one brand.
//!
//! ## Responsibilities
//! - **Flattening**: Nested primitive documents become dotted paths (`color.blue.500`).
//! - **Lookup**: Reference lookup with the `color.` shorthand (`blue.500`).
//!
//! ## Key Types
//! - `TokenRegistry`: Immutable map of dotted path -> raw value.

use crate::errors::{Result, TokenError};
use mond_tokens_data::model::{TokenDocument, TokenNode};
use std::collections::BTreeMap;

/// Root segment tried when a reference does not match a path exactly.
pub const COLOR_ROOT: &str = "color";

/// All primitive tokens of one brand keyed by dotted path.
///
/// Values are stored raw; they may still be references to other primitives
/// and are only resolved by the [`Resolver`](crate::resolver::Resolver).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenRegistry {
    tokens: BTreeMap<String, String>,
}

impl TokenRegistry {
    /// Flattens a (merged) primitive document.
    pub fn from_document(doc: &TokenDocument) -> Result<Self> {
        let mut tokens = BTreeMap::new();
        let mut path = Vec::new();
        flatten(doc, &mut path, &mut tokens)?;
        Ok(Self { tokens })
    }

    /// Raw value at an exact dotted path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.tokens.get(path).map(String::as_str)
    }

    /// Finds a reference target, trying the exact path first and then the
    /// `color.` shorthand. Returns the matched path and its raw value.
    pub fn lookup(&self, reference: &str) -> Option<(&str, &str)> {
        if let Some((k, v)) = self.tokens.get_key_value(reference) {
            return Some((k.as_str(), v.as_str()));
        }
        let prefixed = format!("{}.{}", COLOR_ROOT, reference);
        self.tokens
            .get_key_value(&prefixed)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates tokens in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Rejects keys that would make dotted paths ambiguous.
pub(crate) fn check_segment(path: &[String], key: &str) -> Result<()> {
    if key.is_empty() || key.contains('.') {
        let mut full = path.to_vec();
        full.push(key.to_string());
        return Err(TokenError::InvalidPath {
            path: full.join("."),
        });
    }
    Ok(())
}

fn flatten(
    level: &BTreeMap<String, TokenNode>,
    path: &mut Vec<String>,
    out: &mut BTreeMap<String, String>,
) -> Result<()> {
    for (key, node) in level {
        check_segment(path, key)?;
        path.push(key.clone());
        match node {
            TokenNode::Value(value) => {
                out.insert(path.join("."), value.raw());
            }
            TokenNode::Mode(_) => {
                return Err(TokenError::ModeInPrimitive {
                    path: path.join("."),
                });
            }
            TokenNode::Group(children) => flatten(children, path, out)?,
        }
        path.pop();
    }
    Ok(())
}
