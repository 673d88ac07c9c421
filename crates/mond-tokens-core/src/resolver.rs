//! # Resolver Module
//!
//! Turns raw token values into concrete CSS values.
//!
//! ## Responsibilities
//! - **Classification**: Literal, dotted reference or composite (gradient) value.
//! - **References**: Followed through the registry, including primitive aliases.
//! - **Composites**: Embedded references are substituted best-effort.
//!
//! A plain reference that cannot be found is fatal. Inside a composite the
//! unresolved text is left as written unless the resolver is strict.

use crate::errors::{Result, TokenError};
use crate::registry::TokenRegistry;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static UNIT_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(\d+\.?\d*|\.\d+)(px|rem|em|%|vh|vw|s|ms)$").expect("valid unit regex")
});

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+\.?\d*|\.\d+)$").expect("valid number regex"));

static EMBEDDED_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[A-Za-z_][\w-]*(?:\.[\w-]+)+\}|\b[A-Za-z_][\w-]*(?:\.[\w-]+)+")
        .expect("valid reference regex")
});

/// How a raw value is treated by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Passed through unchanged.
    Literal,
    /// A dotted path into the primitive registry.
    Reference,
    /// A gradient expression with embedded references.
    Composite,
}

/// Classifies a raw token value.
pub fn classify(value: &str) -> ValueKind {
    if value.contains("gradient(") {
        return ValueKind::Composite;
    }
    if is_literal(value) {
        ValueKind::Literal
    } else {
        ValueKind::Reference
    }
}

fn is_literal(value: &str) -> bool {
    value.starts_with('#')
        || value.starts_with("rgb(")
        || value.starts_with("rgba(")
        || value.contains(' ')
        || value == "none"
        || value == "transparent"
        || UNIT_VALUE.is_match(value)
        || BARE_NUMBER.is_match(value)
        || is_quoted(value)
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
}

fn strip_braces(reference: &str) -> &str {
    reference
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .unwrap_or(reference)
}

/// Resolves values against one brand's primitives.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a TokenRegistry,
    strict: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a TokenRegistry) -> Self {
        Self {
            registry,
            strict: false,
        }
    }

    /// When strict, unresolved references inside composites are fatal too.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn registry(&self) -> &'a TokenRegistry {
        self.registry
    }

    /// Resolves `raw`, the value of the token named `token`, to a terminal CSS value.
    ///
    /// Only registry paths take part in cycle detection; `token` is used for
    /// error reporting.
    pub fn resolve(&self, token: &str, raw: &str) -> Result<String> {
        let mut chain = Vec::new();
        self.resolve_value(token, raw, &mut chain)
    }

    fn resolve_value(&self, token: &str, raw: &str, chain: &mut Vec<String>) -> Result<String> {
        match classify(raw) {
            ValueKind::Literal => Ok(raw.to_string()),
            ValueKind::Reference => self.follow(token, raw, chain),
            ValueKind::Composite => self.resolve_composite(token, raw, chain),
        }
    }

    fn follow(&self, token: &str, reference: &str, chain: &mut Vec<String>) -> Result<String> {
        let target = strip_braces(reference);
        let Some((path, value)) = self.registry.lookup(target) else {
            return Err(TokenError::UnresolvedReference {
                token: token.to_string(),
                reference: reference.to_string(),
            });
        };

        if chain.iter().any(|seen| seen == path) {
            let mut cycle = chain.clone();
            cycle.push(path.to_string());
            return Err(TokenError::CircularReference { chain: cycle });
        }

        chain.push(path.to_string());
        let resolved = self.resolve_value(token, value, chain);
        chain.pop();
        resolved
    }

    fn resolve_composite(&self, token: &str, raw: &str, chain: &mut Vec<String>) -> Result<String> {
        let mut out = String::with_capacity(raw.len());
        let mut last = 0;
        for m in EMBEDDED_REFERENCE.find_iter(raw) {
            out.push_str(&raw[last..m.start()]);
            match self.follow(token, m.as_str(), chain) {
                Ok(value) => out.push_str(&value),
                Err(TokenError::UnresolvedReference { reference, .. }) if !self.strict => {
                    debug!(token, reference = %reference, "Leaving unresolved reference in composite value");
                    out.push_str(m.as_str());
                }
                Err(e) => return Err(e),
            }
            last = m.end();
        }
        out.push_str(&raw[last..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TokenRegistry {
        [
            ("color.blue.500", "#1890ff"),
            ("color.white.50", "#ffffff"),
            ("color.gray.300", "#cbd5e1"),
            ("color.brand.primary.500", "blue.500"),
            ("color.loop.a", "loop.b"),
            ("color.loop.b", "loop.a"),
            ("spacing.4", "1rem"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn classifies_literals() {
        for literal in [
            "#fff",
            "rgb(0, 0, 0)",
            "rgba(0,0,0,0.5)",
            "0 1px 2px rgba(0,0,0,0.1)",
            "none",
            "transparent",
            "16px",
            "1.5rem",
            "-0.02em",
            "100%",
            "50vh",
            "100vw",
            "200ms",
            "0.3s",
            "600",
            "-1",
            "1.5",
            "\"Inter\"",
            "'Roboto Mono'",
        ] {
            assert_eq!(classify(literal), ValueKind::Literal, "{}", literal);
        }
    }

    #[test]
    fn classifies_references_and_composites() {
        assert_eq!(classify("gray.600"), ValueKind::Reference);
        assert_eq!(classify("{color.blue.500}"), ValueKind::Reference);
        assert_eq!(classify("inherit"), ValueKind::Reference);
        assert_eq!(
            classify("linear-gradient(135deg, white.50 0%, blue.500 100%)"),
            ValueKind::Composite
        );
        assert_eq!(classify("radial-gradient(blue.500,white.50)"), ValueKind::Composite);
    }

    #[test]
    fn resolves_plain_and_aliased_references() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        assert_eq!(resolver.resolve("text.link", "blue.500").unwrap(), "#1890ff");
        assert_eq!(
            resolver.resolve("text.link", "color.blue.500").unwrap(),
            "#1890ff"
        );
        assert_eq!(
            resolver.resolve("text.link", "{color.blue.500}").unwrap(),
            "#1890ff"
        );
        assert_eq!(
            resolver.resolve("button.bg", "brand.primary.500").unwrap(),
            "#1890ff"
        );
        assert_eq!(resolver.resolve("gap", "spacing.4").unwrap(), "1rem");
        assert_eq!(resolver.resolve("gap", "#123456").unwrap(), "#123456");
    }

    #[test]
    fn unresolved_plain_reference_is_fatal() {
        let registry = registry();
        let err = Resolver::new(&registry)
            .resolve("surface.bad", "nonexistent.999")
            .unwrap_err();
        match err {
            TokenError::UnresolvedReference { token, reference } => {
                assert_eq!(token, "surface.bad");
                assert_eq!(reference, "nonexistent.999");
            }
            other => panic!("Expected UnresolvedReference, got {:?}", other),
        }
    }

    #[test]
    fn composite_leaves_unknown_references() {
        let registry = registry();
        let resolved = Resolver::new(&registry)
            .resolve(
                "surface.hero",
                "linear-gradient(135deg, white.50 0%, nonexistent.999 100%)",
            )
            .unwrap();
        assert_eq!(
            resolved,
            "linear-gradient(135deg, #ffffff 0%, nonexistent.999 100%)"
        );
    }

    #[test]
    fn composite_resolves_braced_and_aliased_references() {
        let registry = registry();
        let resolved = Resolver::new(&registry)
            .resolve(
                "surface.hero",
                "linear-gradient(to right, {color.gray.300}, brand.primary.500 80%)",
            )
            .unwrap();
        assert_eq!(resolved, "linear-gradient(to right, #cbd5e1, #1890ff 80%)");
    }

    #[test]
    fn strict_composite_reports_unknown_references() {
        let registry = registry();
        let err = Resolver::new(&registry)
            .strict(true)
            .resolve("surface.hero", "linear-gradient(white.50, nonexistent.999)")
            .unwrap_err();
        assert!(matches!(err, TokenError::UnresolvedReference { reference, .. } if reference == "nonexistent.999"));
    }

    #[test]
    fn detects_reference_cycles() {
        let registry = registry();
        let err = Resolver::new(&registry)
            .resolve("surface.loop", "loop.a")
            .unwrap_err();
        match err {
            TokenError::CircularReference { chain } => {
                assert_eq!(
                    chain,
                    vec!["color.loop.a", "color.loop.b", "color.loop.a"]
                );
            }
            other => panic!("Expected CircularReference, got {:?}", other),
        }
    }

    #[test]
    fn semantic_token_may_share_its_primitive_path() {
        let registry: TokenRegistry = [("color.brand.primary", "#2563eb")].into_iter().collect();
        let resolver = Resolver::new(&registry);
        assert_eq!(
            resolver
                .resolve("color.brand.primary", "brand.primary")
                .unwrap(),
            "#2563eb"
        );
    }

    #[test]
    fn self_referencing_primitive_is_a_cycle() {
        let registry: TokenRegistry = [("color.gray.500", "gray.500")].into_iter().collect();
        let err = Resolver::new(&registry)
            .resolve("color.gray.500", "gray.500")
            .unwrap_err();
        assert!(matches!(err, TokenError::CircularReference { chain } if chain == ["color.gray.500", "color.gray.500"]));
    }

    #[test]
    fn composite_braces_must_pair() {
        let registry = registry();
        let resolved = Resolver::new(&registry)
            .resolve("surface.hero", "linear-gradient(white.50}, {gray.300}, {blue.500)")
            .unwrap();
        assert_eq!(resolved, "linear-gradient(#ffffff}, #cbd5e1, {#1890ff)");
    }
}
