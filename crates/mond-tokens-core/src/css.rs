//! # CSS Module
//!
//! Serializes a [`ThemePartition`] into the CSS custom-property file.
//!
//! ## Output Layout
//! 1. Generated-file header (do-not-edit notice, optional timestamp).
//! 2. `:root` with theme-independent variables, alphabetical.
//! 3. `[data-theme="light"], :root` with every light semantic variable.
//! 4. `[data-theme="dark"]` with only the variables whose value changes.
//!
//! Empty blocks are skipped.

use crate::partition::ThemePartition;
use crate::types::ResolvedVariable;
use chrono::{DateTime, SecondsFormat, Utc};

pub const ROOT_SELECTOR: &str = ":root";
pub const LIGHT_SELECTOR: &str = "[data-theme=\"light\"], :root";
pub const DARK_SELECTOR: &str = "[data-theme=\"dark\"]";

/// Block comment opening every generated artifact: a do-not-edit notice and,
/// when given, the generation time.
pub fn generated_header(timestamp: Option<DateTime<Utc>>) -> String {
    let mut out = String::from("/**\n * Do not edit directly, this file was generated by mond-tokens.\n");
    if let Some(ts) = timestamp {
        out.push_str(" * Generated on ");
        out.push_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true));
        out.push('\n');
    }
    out.push_str(" */\n");
    out
}

/// Renders the full CSS artifact.
pub fn emit_css(partition: &ThemePartition, timestamp: Option<DateTime<Utc>>) -> String {
    let mut out = generated_header(timestamp);
    write_block(&mut out, ROOT_SELECTOR, partition.shared.iter());
    write_block(&mut out, LIGHT_SELECTOR, partition.light.iter());
    write_block(&mut out, DARK_SELECTOR, partition.dark_overrides().into_iter());
    out
}

fn write_block<'a>(
    out: &mut String,
    selector: &str,
    vars: impl Iterator<Item = &'a ResolvedVariable>,
) {
    let mut vars = vars.peekable();
    if vars.peek().is_none() {
        return;
    }
    out.push('\n');
    out.push_str(selector);
    out.push_str(" {\n");
    for var in vars {
        out.push_str("  ");
        out.push_str(&var.name);
        out.push_str(": ");
        out.push_str(&var.value);
        out.push_str(";\n");
    }
    out.push_str("}\n");
}
