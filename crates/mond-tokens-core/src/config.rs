//! # Config Module
//!
//! Build settings shared by the library and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Brand that always exists, with no overlay on top of the primitives.
pub const DEFAULT_BRAND: &str = "default";

/// Environment variable carrying a reproducible-build timestamp (Unix seconds).
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Root of the token sources (`primitives/`, `semantic/`, `brands/`).
    pub tokens_dir: PathBuf,
    /// Where `tokens.css` and `themes/` are written.
    pub out_dir: PathBuf,
    /// Custom-property prefix, without dashes.
    pub prefix: String,
    /// Brand whose primitives feed the CSS file.
    pub css_brand: String,
    /// Generation time written into artifact headers. `None` omits it.
    pub timestamp: Option<DateTime<Utc>>,
    /// Treat unresolved references inside gradients as errors.
    pub strict: bool,
    /// Emit the colour palette into `:root` alongside the other primitives.
    pub include_palette: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tokens_dir: PathBuf::from("tokens"),
            out_dir: PathBuf::from("dist"),
            prefix: "mond".to_string(),
            css_brand: DEFAULT_BRAND.to_string(),
            timestamp: None,
            strict: false,
            include_palette: false,
        }
    }
}

/// Reads `SOURCE_DATE_EPOCH`, ignoring values that are not Unix seconds.
pub fn source_date_epoch() -> Option<DateTime<Utc>> {
    std::env::var(SOURCE_DATE_EPOCH)
        .ok()
        .and_then(|v| parse_epoch(&v))
}

fn parse_epoch(value: &str) -> Option<DateTime<Utc>> {
    let secs = value.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0)
}
