//! Theme Pipeline Tests
//!
//! Drives loading, partitioning and emission through an in-memory loader.

use mond_tokens_core::css::emit_css;
use mond_tokens_core::partition::{collect_semantic_tokens, partition, PartitionOptions};
use mond_tokens_core::theme::{build_theme, Category};
use mond_tokens_core::{MemorySourceLoader, Mode, Resolver, TokenSources};
use std::path::Path;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn loader() -> MemorySourceLoader {
    MemorySourceLoader::new()
        .with_file(
            "tokens/primitives/colors.json",
            r##"{ "color": { "gray": { "300": "#cbd5e1", "700": "#334155" }, "blue": { "500": "#1890ff" } } }"##,
        )
        .with_file(
            "tokens/primitives/typography.json",
            r##"{
                "fontSize": { "sm": "0.875rem" },
                "fontWeight": { "bold": 700 },
                "fontFamily": { "mono": "'JetBrains Mono', monospace" },
                "lineHeight": { "tight": 1.25 },
                "letterSpacing": { "wide": "0.02em" }
            }"##,
        )
        .with_file(
            "tokens/primitives/shadows.json",
            r##"{ "shadow": { "sm": "0 1px 2px rgba(0,0,0,0.05)" } }"##,
        )
        .with_file(
            "tokens/semantic/base.json",
            r##"{ "surface": { "border": { "light": "gray.300", "dark": "gray.700" } } }"##,
        )
        .with_file(
            "tokens/semantic/extra.json",
            r##"{ "surface": { "focus": "blue.500" } }"##,
        )
}

/// Semantic files merge.
///
/// Validates:
/// - Tokens from separate semantic files share one tree
/// - Typography primitives land in `:root`
#[test]
fn merged_semantic_files_emit_one_stylesheet() {
    init_tracing();
    let sources = TokenSources::load(&loader(), Path::new("tokens")).unwrap();
    let registry = sources.registry_for("default").unwrap();
    let resolver = Resolver::new(&registry);
    let semantic = collect_semantic_tokens(&sources.semantic).unwrap();
    let themed = partition(&semantic, &resolver, &PartitionOptions::default()).unwrap();
    let css = emit_css(&themed, None);

    assert!(css.contains("  --mond-font-size-sm: 0.875rem;\n"));
    assert!(css.contains("  --mond-font-weight-bold: 700;\n"));
    assert!(css.contains("  --mond-line-height-tight: 1.25;\n"));
    assert!(css.contains("  --mond-shadow-sm: 0 1px 2px rgba(0,0,0,0.05);\n"));
    assert!(css.contains("  --mond-surface-border: #cbd5e1;\n"));
    assert!(css.contains("  --mond-surface-border: #334155;\n"));
    assert!(css.contains("  --mond-surface-focus: #1890ff;\n"));
    assert_eq!(css.matches("--mond-surface-focus").count(), 1);
}

#[test]
fn every_category_is_routed() {
    init_tracing();
    let sources = TokenSources::load(&loader(), Path::new("tokens")).unwrap();
    let registry = sources.registry_for("default").unwrap();
    let resolver = Resolver::new(&registry);
    let semantic = collect_semantic_tokens(&sources.semantic).unwrap();

    for mode in Mode::ALL {
        let theme = build_theme(&resolver, &semantic, mode).unwrap();
        for category in Category::ALL {
            if category == Category::Space || category == Category::Radii {
                assert!(theme.category(category).is_empty(), "{:?}", category);
            } else {
                assert!(!theme.category(category).is_empty(), "{:?}", category);
            }
        }
        assert_eq!(theme.fonts["mono"], "'JetBrains Mono', monospace");
        assert_eq!(theme.font_weights["bold"], "700");
    }
}
