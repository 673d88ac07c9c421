//! # Generator Module
//!
//! The build pipeline: sources in, artifacts out.
//!
//! ## Responsibilities
//! - **Generation**: Resolves every brand and mode in memory.
//! - **Writing**: Each artifact is written to a temp file next to its target
//!   and renamed into place, and only after generation succeeded for all of
//!   them.
//!
//! ## Artifacts
//! - `tokens.css`: variables for the CSS brand.
//! - `themes/<brand>-<mode>.js` and `.d.ts`: theme objects.

use crate::config::BuildConfig;
use crate::css::emit_css;
use crate::errors::{Result, TokenError};
use crate::loader::{SourceLoader, TokenSources};
use crate::partition::{collect_semantic_tokens, partition, PartitionOptions};
use crate::resolver::Resolver;
use crate::theme::{build_theme, emit_dts, emit_js};
use crate::types::Mode;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

pub const CSS_FILE: &str = "tokens.css";
pub const THEMES_DIR: &str = "themes";

/// A generated file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

/// Generates every artifact from already-loaded sources.
pub fn generate(sources: &TokenSources, config: &BuildConfig) -> Result<Vec<Artifact>> {
    let brands = sources.brand_names();
    if !brands.contains(&config.css_brand) {
        return Err(TokenError::UnknownBrand {
            brand: config.css_brand.clone(),
        });
    }

    let semantic = collect_semantic_tokens(&sources.semantic)?;
    debug!(
        primitives = sources.primitives.len(),
        semantic = semantic.len(),
        brands = brands.len(),
        "Sources ready"
    );

    let options = PartitionOptions {
        prefix: config.prefix.clone(),
        include_palette: config.include_palette,
    };

    let mut artifacts = Vec::with_capacity(1 + brands.len() * 4);
    for brand in &brands {
        let registry = sources.registry_for(brand)?;
        let resolver = Resolver::new(&registry).strict(config.strict);

        if *brand == config.css_brand {
            let themed = partition(&semantic, &resolver, &options)?;
            artifacts.insert(
                0,
                Artifact {
                    path: PathBuf::from(CSS_FILE),
                    contents: emit_css(&themed, config.timestamp),
                },
            );
        }

        for mode in Mode::ALL {
            let theme = build_theme(&resolver, &semantic, mode)?;
            let stem = format!("{}-{}", brand, mode);
            artifacts.push(Artifact {
                path: Path::new(THEMES_DIR).join(format!("{}.js", stem)),
                contents: emit_js(&theme, config.timestamp)?,
            });
            artifacts.push(Artifact {
                path: Path::new(THEMES_DIR).join(format!("{}.d.ts", stem)),
                contents: emit_dts(&theme, config.timestamp),
            });
        }
    }
    Ok(artifacts)
}

/// Loads sources and generates artifacts without touching the output directory.
pub fn build(loader: &dyn SourceLoader, config: &BuildConfig) -> Result<Vec<Artifact>> {
    let sources = TokenSources::load(loader, &config.tokens_dir)?;
    generate(&sources, config)
}

/// Writes artifacts under `out_dir`, replacing existing files atomically.
#[instrument(level = "debug", skip_all, fields(out_dir = %out_dir.display()))]
pub fn write_artifacts(out_dir: &Path, artifacts: &[Artifact]) -> Result<()> {
    for artifact in artifacts {
        let target = out_dir.join(&artifact.path);
        let parent = target.parent().unwrap_or(out_dir);
        let io_err = |source| TokenError::Io {
            path: target.clone(),
            source,
        };

        std::fs::create_dir_all(parent).map_err(io_err)?;
        let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(artifact.contents.as_bytes()).map_err(io_err)?;
        tmp.persist(&target).map_err(|e| io_err(e.error))?;
        info!(path = %target.display(), bytes = artifact.contents.len(), "Wrote artifact");
    }
    Ok(())
}

/// Full run: load, generate, then write.
pub fn run(loader: &dyn SourceLoader, config: &BuildConfig) -> Result<Vec<Artifact>> {
    let artifacts = build(loader, config)?;
    write_artifacts(&config.out_dir, &artifacts)?;
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MemorySourceLoader;

    fn loader() -> MemorySourceLoader {
        MemorySourceLoader::new()
            .with_file(
                "tokens/primitives/colors.json",
                r##"{ "color": { "gray": { "300": "#cbd5e1" }, "brand": { "primary": "#2563eb" } } }"##,
            )
            .with_file(
                "tokens/primitives/spacing.json",
                r##"{ "spacing": { "4": "1rem" } }"##,
            )
            .with_file(
                "tokens/semantic/surface.json",
                r##"{ "surface": { "border": { "light": "gray.300", "dark": "#334155" } } }"##,
            )
            .with_file(
                "tokens/brands/bsf.json",
                r##"{ "color": { "brand": { "primary": "#e11d48" } } }"##,
            )
    }

    #[test]
    fn generates_css_and_theme_per_brand_and_mode() {
        let artifacts = build(&loader(), &BuildConfig::default()).unwrap();
        let paths: Vec<String> = artifacts
            .iter()
            .map(|a| a.path.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            paths,
            vec![
                "tokens.css",
                "themes/bsf-light.js",
                "themes/bsf-light.d.ts",
                "themes/bsf-dark.js",
                "themes/bsf-dark.d.ts",
                "themes/default-light.js",
                "themes/default-light.d.ts",
                "themes/default-dark.js",
                "themes/default-dark.d.ts",
            ]
        );

        let bsf = &artifacts[1].contents;
        assert!(bsf.contains("\"brandPrimary\": \"#e11d48\""));
        let default = &artifacts[5].contents;
        assert!(default.contains("\"brandPrimary\": \"#2563eb\""));
    }

    #[test]
    fn css_brand_must_exist() {
        let config = BuildConfig {
            css_brand: "acme".into(),
            ..Default::default()
        };
        assert!(matches!(
            build(&loader(), &config),
            Err(TokenError::UnknownBrand { brand }) if brand == "acme"
        ));
    }

    #[test]
    fn writes_artifacts_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = vec![
            Artifact {
                path: PathBuf::from(CSS_FILE),
                contents: ":root {}\n".into(),
            },
            Artifact {
                path: Path::new(THEMES_DIR).join("default-light.js"),
                contents: "export const theme = {};\n".into(),
            },
        ];
        write_artifacts(dir.path(), &artifacts).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join(CSS_FILE)).unwrap(),
            ":root {}\n"
        );
        assert!(dir.path().join("themes/default-light.js").is_file());

        // Overwritten in full on the next run.
        write_artifacts(
            dir.path(),
            &[Artifact {
                path: PathBuf::from(CSS_FILE),
                contents: "x".into(),
            }],
        )
        .unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join(CSS_FILE)).unwrap(), "x");
    }
}
