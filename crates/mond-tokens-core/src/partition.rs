//! # Partition Module
//!
//! Splits tokens into the theme-independent set and the light/dark pair.
//!
//! ## Responsibilities
//! - **Semantic walk**: Depth-first over the semantic tree. A `{light, dark}`
//!   object is a mode leaf, a bare value is shared by both modes, anything
//!   else is another nesting level.
//! - **Shared variables**: Primitive tokens (minus the colour palette unless
//!   asked for) that go into `:root`.

use crate::errors::Result;
use crate::naming::css_var_name;
use crate::registry::{check_segment, COLOR_ROOT};
use crate::resolver::Resolver;
use crate::types::{Mode, ResolvedVariable, ThemeScope};
use mond_tokens_data::model::{TokenDocument, TokenNode};
use std::collections::BTreeMap;
use tracing::warn;

/// A semantic token with its raw per-mode values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticToken {
    pub path: Vec<String>,
    pub light: String,
    pub dark: String,
}

impl SemanticToken {
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }

    pub fn raw(&self, mode: Mode) -> &str {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Collects semantic leaves in traversal order.
pub fn collect_semantic_tokens(doc: &TokenDocument) -> Result<Vec<SemanticToken>> {
    let mut out = Vec::new();
    walk(doc, &mut Vec::new(), &mut out)?;
    Ok(out)
}

fn walk(
    level: &BTreeMap<String, TokenNode>,
    path: &mut Vec<String>,
    out: &mut Vec<SemanticToken>,
) -> Result<()> {
    for (key, node) in level {
        check_segment(path, key)?;
        path.push(key.clone());
        match node {
            TokenNode::Value(value) => out.push(SemanticToken {
                path: path.clone(),
                light: value.raw(),
                dark: value.raw(),
            }),
            TokenNode::Mode(pair) => out.push(SemanticToken {
                path: path.clone(),
                light: pair.light.raw(),
                dark: pair.dark.raw(),
            }),
            TokenNode::Group(children) => walk(children, path, out)?,
        }
        path.pop();
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PartitionOptions {
    /// Custom-property prefix (`mond`).
    pub prefix: String,
    /// Emit the `color.*` palette into `:root` as well.
    pub include_palette: bool,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            prefix: "mond".to_string(),
            include_palette: false,
        }
    }
}

/// Resolved variables grouped by the CSS block they belong to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemePartition {
    /// Primitive variables, sorted by name.
    pub shared: Vec<ResolvedVariable>,
    /// Every semantic variable for light mode, in traversal order.
    pub light: Vec<ResolvedVariable>,
    /// Every semantic variable for dark mode, in traversal order.
    pub dark: Vec<ResolvedVariable>,
}

impl ThemePartition {
    /// Dark variables whose value differs from the light one.
    pub fn dark_overrides(&self) -> Vec<&ResolvedVariable> {
        let light: BTreeMap<&str, &str> = self
            .light
            .iter()
            .map(|v| (v.name.as_str(), v.value.as_str()))
            .collect();
        self.dark
            .iter()
            .filter(|v| light.get(v.name.as_str()) != Some(&v.value.as_str()))
            .collect()
    }
}

/// Resolves primitives and semantic tokens into a [`ThemePartition`].
pub fn partition(
    semantic: &[SemanticToken],
    resolver: &Resolver<'_>,
    options: &PartitionOptions,
) -> Result<ThemePartition> {
    let mut shared = Vec::new();
    for (token, raw) in resolver.registry().iter() {
        let segments: Vec<&str> = token.split('.').collect();
        if !options.include_palette && segments.first() == Some(&COLOR_ROOT) {
            continue;
        }
        shared.push(ResolvedVariable {
            token: token.to_string(),
            name: css_var_name(&options.prefix, &segments),
            value: resolver.resolve(token, raw)?,
            scope: ThemeScope::Root,
        });
    }
    shared.sort_by(|a, b| a.name.cmp(&b.name));
    name_collisions(&shared);

    let mut light = Vec::with_capacity(semantic.len());
    let mut dark = Vec::with_capacity(semantic.len());
    for token in semantic {
        let dotted = token.dotted();
        let name = css_var_name(&options.prefix, &token.path);
        for mode in Mode::ALL {
            let variable = ResolvedVariable {
                token: dotted.clone(),
                name: name.clone(),
                value: resolver.resolve(&dotted, token.raw(mode))?,
                scope: mode.into(),
            };
            match mode {
                Mode::Light => light.push(variable),
                Mode::Dark => dark.push(variable),
            }
        }
    }

    name_collisions(&light);

    Ok(ThemePartition {
        shared,
        light,
        dark,
    })
}

/// Warns about tokens that map onto an already used custom-property name
/// (`text.onPrimary` and `text.on_primary` both give `--mond-text-on-primary`).
/// Returns how many collisions were found.
fn name_collisions(variables: &[ResolvedVariable]) -> usize {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    let mut collisions = 0;
    for variable in variables {
        if let Some(previous) = seen.insert(&variable.name, &variable.token) {
            collisions += 1;
            warn!(
                name = %variable.name,
                token = %variable.token,
                previous = %previous,
                "CSS variable name produced by more than one token"
            );
        }
    }
    collisions
}
