//! # Theme Object Module
//!
//! Builds the per-brand, per-mode theme objects consumed by styled-components
//! and renders them as JavaScript modules with matching TypeScript declarations.
//!
//! ## Category Routing
//! The first path segment picks the category through a closed table
//! (`color` -> `colors`, `spacing` -> `space`, ...). The remaining segments are
//! camel-cased into the key (`color.brand.primary.600` -> `colors.brandPrimary600`).
//! Tokens whose first segment is not in the table are dropped with a warning.

use crate::css::generated_header;
use crate::errors::{Result, TokenError};
use crate::naming::camel_case;
use crate::partition::SemanticToken;
use crate::resolver::Resolver;
use crate::types::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A theme-object category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Colors,
    Space,
    FontSizes,
    FontWeights,
    Fonts,
    LineHeights,
    LetterSpacings,
    Radii,
    Shadows,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Colors,
        Category::Space,
        Category::FontSizes,
        Category::FontWeights,
        Category::Fonts,
        Category::LineHeights,
        Category::LetterSpacings,
        Category::Radii,
        Category::Shadows,
    ];

    /// Maps a token's first path segment to its category.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "color" => Some(Category::Colors),
            "spacing" => Some(Category::Space),
            "fontSize" => Some(Category::FontSizes),
            "fontWeight" => Some(Category::FontWeights),
            "fontFamily" => Some(Category::Fonts),
            "lineHeight" => Some(Category::LineHeights),
            "letterSpacing" => Some(Category::LetterSpacings),
            "radius" => Some(Category::Radii),
            "shadow" => Some(Category::Shadows),
            _ => None,
        }
    }

    /// Property name in the theme object.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Space => "space",
            Category::FontSizes => "fontSizes",
            Category::FontWeights => "fontWeights",
            Category::Fonts => "fonts",
            Category::LineHeights => "lineHeights",
            Category::LetterSpacings => "letterSpacings",
            Category::Radii => "radii",
            Category::Shadows => "shadows",
        }
    }
}

/// Nested category -> key -> value map for one brand and mode.
///
/// Field order is the order categories appear in the generated module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeObject {
    pub colors: BTreeMap<String, String>,
    pub space: BTreeMap<String, String>,
    pub font_sizes: BTreeMap<String, String>,
    pub font_weights: BTreeMap<String, String>,
    pub fonts: BTreeMap<String, String>,
    pub line_heights: BTreeMap<String, String>,
    pub letter_spacings: BTreeMap<String, String>,
    pub radii: BTreeMap<String, String>,
    pub shadows: BTreeMap<String, String>,
}

impl ThemeObject {
    pub fn category(&self, category: Category) -> &BTreeMap<String, String> {
        match category {
            Category::Colors => &self.colors,
            Category::Space => &self.space,
            Category::FontSizes => &self.font_sizes,
            Category::FontWeights => &self.font_weights,
            Category::Fonts => &self.fonts,
            Category::LineHeights => &self.line_heights,
            Category::LetterSpacings => &self.letter_spacings,
            Category::Radii => &self.radii,
            Category::Shadows => &self.shadows,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut BTreeMap<String, String> {
        match category {
            Category::Colors => &mut self.colors,
            Category::Space => &mut self.space,
            Category::FontSizes => &mut self.font_sizes,
            Category::FontWeights => &mut self.font_weights,
            Category::Fonts => &mut self.fonts,
            Category::LineHeights => &mut self.line_heights,
            Category::LetterSpacings => &mut self.letter_spacings,
            Category::Radii => &mut self.radii,
            Category::Shadows => &mut self.shadows,
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.category(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves every primitive and the `mode` value of every semantic token,
/// then routes them into a [`ThemeObject`].
pub fn build_theme(
    resolver: &Resolver<'_>,
    semantic: &[SemanticToken],
    mode: Mode,
) -> Result<ThemeObject> {
    let mut values: BTreeMap<String, String> = BTreeMap::new();
    for (token, raw) in resolver.registry().iter() {
        values.insert(token.to_string(), resolver.resolve(token, raw)?);
    }
    for token in semantic {
        let dotted = token.dotted();
        let value = resolver.resolve(&dotted, token.raw(mode))?;
        values.insert(dotted, value);
    }

    let mut theme = ThemeObject::default();
    let mut dropped: BTreeMap<String, usize> = BTreeMap::new();
    for (path, value) in values {
        let segments: Vec<&str> = path.split('.').collect();
        let category = match Category::from_segment(segments[0]) {
            Some(c) if segments.len() > 1 => c,
            _ => {
                *dropped.entry(segments[0].to_string()).or_default() += 1;
                continue;
            }
        };
        let key = camel_case(&segments[1..]);
        if let Some(previous) = theme.category_mut(category).insert(key.clone(), value) {
            warn!(
                token = %path,
                key = %key,
                previous = %previous,
                "Theme key produced by more than one token; keeping the last"
            );
        }
    }

    for (root, count) in dropped {
        warn!(
            %mode,
            root = %root,
            count,
            "Dropping tokens with unrecognized category from theme object"
        );
    }

    Ok(theme)
}

/// Renders the theme as an ES module exporting `theme`.
pub fn emit_js(theme: &ThemeObject, timestamp: Option<DateTime<Utc>>) -> Result<String> {
    let body = serde_json::to_string_pretty(theme).map_err(TokenError::Serialize)?;
    let mut out = generated_header(timestamp);
    out.push_str("\nexport const theme = ");
    out.push_str(&body);
    out.push_str(";\n\nexport default theme;\n");
    Ok(out)
}

/// Renders the TypeScript declaration mirroring [`emit_js`].
pub fn emit_dts(theme: &ThemeObject, timestamp: Option<DateTime<Utc>>) -> String {
    let mut out = generated_header(timestamp);
    out.push_str("\nexport declare const theme: {\n");
    for category in Category::ALL {
        let entries = theme.category(category);
        if entries.is_empty() {
            out.push_str(&format!("  {}: {{}};\n", category.key()));
            continue;
        }
        out.push_str(&format!("  {}: {{\n", category.key()));
        for key in entries.keys() {
            out.push_str(&format!("    {}: string;\n", quote_key(key)));
        }
        out.push_str("  };\n");
    }
    out.push_str("};\n\nexport default theme;\n");
    out
}

fn quote_key(key: &str) -> String {
    let is_ident = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident {
        key.to_string()
    } else {
        format!("{:?}", key)
    }
}
