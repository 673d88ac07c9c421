//! # Mond Tokens
//!
//! `mond-tokens-core` compiles JSON design-token sources into the artifacts the
//! Mond component library consumes at render time.
//!
//! ## Pipeline
//!
//! *   **Loading**: Primitive, semantic and brand documents are read through a
//!     [`SourceLoader`] and merged.
//! *   **Registry**: Primitives are flattened into an immutable [`TokenRegistry`] per brand.
//! *   **Resolution**: The [`Resolver`] follows dotted references (`gray.600`) and
//!     substitutes references embedded in gradients.
//! *   **Partitioning**: Semantic tokens are split into light and dark values.
//! *   **Emission**: One CSS file of custom properties and one theme object
//!     module per brand and mode.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mond_tokens_core::{generator, BuildConfig, FsSourceLoader};
//!
//! let config = BuildConfig::default();
//! let artifacts = generator::run(&FsSourceLoader, &config)?;
//! println!("wrote {} files", artifacts.len());
//! # Ok::<(), mond_tokens_core::TokenError>(())
//! ```

/// Build settings.
pub mod config;

/// CSS custom-property emission.
pub mod css;

pub mod errors;

/// The load -> generate -> write pipeline.
pub mod generator;

/// Token source access and merging.
pub mod loader;

/// Variable and key naming.
pub mod naming;

/// Light/dark partitioning of semantic tokens.
pub mod partition;

/// Flattened primitive tokens.
pub mod registry;

/// Reference resolution.
pub mod resolver;

/// Theme-object emission.
pub mod theme;

/// Shared data structures.
pub mod types;

pub use config::BuildConfig;
pub use errors::TokenError;
pub use generator::Artifact;
pub use loader::{FsSourceLoader, MemorySourceLoader, SourceLoader, TokenSources};
pub use registry::TokenRegistry;
pub use resolver::Resolver;
pub use types::{Mode, ResolvedVariable, ThemeScope};
