//! # Naming Module
//!
//! Turns token paths into CSS custom-property names and theme-object keys.

/// Converts a single path segment to kebab-case (`fontSize` -> `font-size`).
pub fn kebab_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    for c in segment.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' || c == ' ' {
            if !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Builds `--<prefix>-<path joined by dashes>` with every segment kebab-cased.
pub fn css_var_name<S: AsRef<str>>(prefix: &str, path: &[S]) -> String {
    let mut name = String::from("--");
    if !prefix.is_empty() {
        name.push_str(prefix);
    }
    for segment in path {
        if name.len() > 2 {
            name.push('-');
        }
        name.push_str(&kebab_case(segment.as_ref()));
    }
    name
}

/// Camel-cases a list of segments into a single key
/// (`["brand", "primary", "600"]` -> `brandPrimary600`).
pub fn camel_case<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    let words = segments
        .iter()
        .flat_map(|s| s.as_ref().split(['-', '_']))
        .filter(|w| !w.is_empty());
    for word in words {
        if out.is_empty() {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
