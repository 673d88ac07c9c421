//! # Mond Tokens
//!
//! Build-time compiler for the Mond design system's tokens.
//!
//! Primitive tokens (colours, spacing, typography, radii, shadows) and semantic
//! tokens (intent-named, with `light`/`dark` variants) are read from JSON and
//! turned into:
//!
//! *   `tokens.css`: a `:root` block of theme-independent custom properties, a
//!     `[data-theme="light"], :root` block and a minimal `[data-theme="dark"]` block.
//! *   `themes/<brand>-<mode>.js` / `.d.ts`: nested theme objects for
//!     styled-components.
//!
//! This crate re-exports [`mond_tokens_core`] and [`mond_tokens_data`]; the
//! `mond-tokens` binary lives in `mond-tokens-cli`.
//!
//! ```rust,no_run
//! use mond_tokens::{generator, BuildConfig, FsSourceLoader};
//!
//! let config = BuildConfig {
//!     timestamp: None,
//!     ..BuildConfig::default()
//! };
//! generator::run(&FsSourceLoader, &config)?;
//! # Ok::<(), mond_tokens::TokenError>(())
//! ```

pub use mond_tokens_core::*;

/// Serde model of token documents.
pub use mond_tokens_data as data;
