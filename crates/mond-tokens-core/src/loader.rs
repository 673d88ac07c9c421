//! # Loader Module
//!
//! Reads token sources from disk (or any other backing store) and merges them
//! into the documents the generator works on.
//!
//! ## Source Layout
//! - `primitives/*.json`: `colors.json` is required; `spacing`, `typography`,
//!   `radii` and `shadows` are expected but optional; other files are merged
//!   after them in name order.
//! - `semantic/*.json`: at least one file, merged in name order.
//! - `brands/<brand>.json`: optional overlays on top of the primitives.

use crate::config::DEFAULT_BRAND;
use crate::errors::{Result, TokenError};
use crate::registry::TokenRegistry;
use mond_tokens_data::model::{merge_documents, parse_document, TokenDocument};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

pub const PRIMITIVES_DIR: &str = "primitives";
pub const SEMANTIC_DIR: &str = "semantic";
pub const BRANDS_DIR: &str = "brands";

/// Primitive files in merge order. Only the first is required.
pub const PRIMITIVE_FILES: [&str; 5] = [
    "colors.json",
    "spacing.json",
    "typography.json",
    "radii.json",
    "shadows.json",
];

/// Abstracts access to token sources.
///
/// Lets the generator run against an in-memory tree in tests or when
/// embedded in another build tool.
pub trait SourceLoader: Send + Sync {
    /// Reads a file. `Ok(None)` means it does not exist.
    fn read(&self, path: &Path) -> anyhow::Result<Option<String>>;

    /// Lists the `.json` files directly inside `dir`, sorted by path.
    /// `Ok(None)` means the directory does not exist.
    fn list_json(&self, dir: &Path) -> anyhow::Result<Option<Vec<PathBuf>>>;
}

/// The default implementation of `SourceLoader` using `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSourceLoader;

impl SourceLoader for FsSourceLoader {
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    fn read(&self, path: &Path) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list_json(&self, dir: &Path) -> anyhow::Result<Option<Vec<PathBuf>>> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(Some(files))
    }
}

/// In-memory sources keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MemorySourceLoader {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl SourceLoader for MemorySourceLoader {
    fn read(&self, path: &Path) -> anyhow::Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn list_json(&self, dir: &Path) -> anyhow::Result<Option<Vec<PathBuf>>> {
        if !self.files.keys().any(|p| p.starts_with(dir)) {
            return Ok(None);
        }
        Ok(Some(
            self.files
                .keys()
                .filter(|p| {
                    p.parent() == Some(dir) && p.extension().and_then(|e| e.to_str()) == Some("json")
                })
                .cloned()
                .collect(),
        ))
    }
}

/// Everything read from one token directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSources {
    /// Merged primitive documents shared by every brand.
    pub primitives: TokenDocument,
    /// Brand overlays keyed by brand name.
    pub brands: BTreeMap<String, TokenDocument>,
    /// Merged semantic documents.
    pub semantic: TokenDocument,
}

impl TokenSources {
    /// Loads and merges every source under `tokens_dir`.
    #[instrument(level = "debug", skip_all, fields(dir = %tokens_dir.display()))]
    pub fn load(loader: &dyn SourceLoader, tokens_dir: &Path) -> Result<Self> {
        let primitives = load_primitives(loader, &tokens_dir.join(PRIMITIVES_DIR))?;
        let semantic = load_semantic(loader, &tokens_dir.join(SEMANTIC_DIR))?;
        let brands = load_brands(loader, &tokens_dir.join(BRANDS_DIR))?;
        Ok(Self {
            primitives,
            brands,
            semantic,
        })
    }

    /// `default` plus every overlay, sorted.
    pub fn brand_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.brands.keys().cloned().collect();
        if !self.brands.contains_key(DEFAULT_BRAND) {
            names.push(DEFAULT_BRAND.to_string());
        }
        names.sort();
        names
    }

    /// Builds the registry for `brand`: primitives with the brand overlay on top.
    pub fn registry_for(&self, brand: &str) -> Result<TokenRegistry> {
        let Some(overlay) = self.brands.get(brand) else {
            if brand == DEFAULT_BRAND {
                return TokenRegistry::from_document(&self.primitives);
            }
            return Err(TokenError::UnknownBrand {
                brand: brand.to_string(),
            });
        };
        let mut merged = self.primitives.clone();
        for path in merge_documents(&mut merged, overlay.clone()) {
            debug!(brand, token = %path, "Brand overrides primitive");
        }
        TokenRegistry::from_document(&merged)
    }
}

fn read_document(loader: &dyn SourceLoader, path: &Path) -> Result<TokenDocument> {
    let text = loader
        .read(path)
        .map_err(|source| TokenError::Source {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| TokenError::MissingSource {
            path: path.to_path_buf(),
        })?;
    debug!(path = %path.display(), "Loaded token source");
    parse_document(&text).map_err(|source| TokenError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn list_dir(loader: &dyn SourceLoader, dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    loader.list_json(dir).map_err(|source| TokenError::Source {
        path: dir.to_path_buf(),
        source,
    })
}

fn merge_into(target: &mut TokenDocument, doc: TokenDocument, path: &Path) {
    for token in merge_documents(target, doc) {
        warn!(token = %token, source = %path.display(), "Token redefined by later source");
    }
}

fn load_primitives(loader: &dyn SourceLoader, dir: &Path) -> Result<TokenDocument> {
    let listed = list_dir(loader, dir)?.ok_or_else(|| TokenError::MissingSource {
        path: dir.to_path_buf(),
    })?;

    let mut ordered = Vec::with_capacity(listed.len());
    for (i, name) in PRIMITIVE_FILES.iter().enumerate() {
        let path = dir.join(name);
        if listed.contains(&path) {
            ordered.push(path);
        } else if i == 0 {
            return Err(TokenError::MissingSource { path });
        } else {
            debug!(path = %path.display(), "Optional primitive source not present");
        }
    }
    for path in listed {
        if !ordered.contains(&path) {
            ordered.push(path);
        }
    }

    let mut merged = TokenDocument::new();
    for path in ordered {
        let doc = read_document(loader, &path)?;
        merge_into(&mut merged, doc, &path);
    }
    Ok(merged)
}

fn load_semantic(loader: &dyn SourceLoader, dir: &Path) -> Result<TokenDocument> {
    let files = match list_dir(loader, dir)? {
        Some(files) if !files.is_empty() => files,
        _ => {
            return Err(TokenError::MissingSource {
                path: dir.to_path_buf(),
            })
        }
    };
    let mut merged = TokenDocument::new();
    for path in files {
        let doc = read_document(loader, &path)?;
        merge_into(&mut merged, doc, &path);
    }
    Ok(merged)
}

fn load_brands(loader: &dyn SourceLoader, dir: &Path) -> Result<BTreeMap<String, TokenDocument>> {
    let mut brands = BTreeMap::new();
    for path in list_dir(loader, dir)?.unwrap_or_default() {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        brands.insert(name.to_string(), read_document(loader, &path)?);
    }
    Ok(brands)
}
