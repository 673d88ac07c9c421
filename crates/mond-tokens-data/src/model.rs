use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A parsed token source file. Top-level keys are usually categories
/// (`color`, `spacing`, `fontSize`, ...) for primitives or intents
/// (`surface`, `text`, ...) for semantic files.
pub type TokenDocument = BTreeMap<String, TokenNode>;

/// A terminal token value as written in the source.
///
/// Numbers are kept as JSON numbers so `600` stays `600` and `1.5` stays `1.5`
/// when rendered into CSS.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Number(serde_json::Number),
}

impl TokenValue {
    /// The raw value as it will be handed to the resolver.
    pub fn raw(&self) -> String {
        match self {
            TokenValue::Text(s) => s.clone(),
            TokenValue::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => f.write_str(s),
            TokenValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Text(s.to_string())
    }
}

/// A semantic token carrying one value per theme mode.
///
/// Only an object with exactly `light` and `dark` deserializes into this;
/// any sibling key turns the object back into a plain group.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ModePair {
    pub light: TokenValue,
    pub dark: TokenValue,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TokenNode {
    /// A leaf shared by every mode.
    Value(TokenValue),
    /// A `{ "light": ..., "dark": ... }` leaf.
    Mode(ModePair),
    /// A further nesting level.
    Group(BTreeMap<String, TokenNode>),
}

impl TokenNode {
    pub fn is_group(&self) -> bool {
        matches!(self, TokenNode::Group(_))
    }
}

/// Parses a token source file.
pub fn parse_document(text: &str) -> serde_json::Result<TokenDocument> {
    serde_json::from_str(text)
}

/// Deep-merges `overlay` into `base`.
///
/// Groups present on both sides are merged key by key; anything else in the
/// overlay replaces what was there. Returns the dotted paths of replaced
/// leaves so callers can report shadowed definitions.
pub fn merge_documents(base: &mut TokenDocument, overlay: TokenDocument) -> Vec<String> {
    let mut replaced = Vec::new();
    merge_level(base, overlay, &mut Vec::new(), &mut replaced);
    replaced
}

fn merge_level(
    base: &mut BTreeMap<String, TokenNode>,
    overlay: BTreeMap<String, TokenNode>,
    path: &mut Vec<String>,
    replaced: &mut Vec<String>,
) {
    for (key, node) in overlay {
        path.push(key.clone());
        match (base.get_mut(&key), node) {
            (Some(TokenNode::Group(existing)), TokenNode::Group(incoming)) => {
                merge_level(existing, incoming, path, replaced);
            }
            (Some(existing), incoming) => {
                if *existing != incoming {
                    replaced.push(path.join("."));
                }
                *existing = incoming;
            }
            (None, incoming) => {
                base.insert(key, incoming);
            }
        }
        path.pop();
    }
}
