//! # Types Module
//!
//! Shared data types used across the generator.
//!
//! ## Responsibilities
//! - **Mode**: Theme mode selector (light / dark).
//! - **ThemeScope**: Which CSS block a variable lands in.
//! - **ResolvedVariable**: A CSS custom property with its final value.
//!
//! ## Key Types
//! - `Mode`: `Light` or `Dark`.
//! - `ResolvedVariable`: Output unit of the partitioner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Every mode, in generation order.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Light
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The CSS block a variable is emitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeScope {
    /// Theme-independent `:root` block.
    Root,
    /// `[data-theme="light"], :root` block.
    Light,
    /// `[data-theme="dark"]` block.
    Dark,
}

impl From<Mode> for ThemeScope {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Light => ThemeScope::Light,
            Mode::Dark => ThemeScope::Dark,
        }
    }
}

/// A CSS custom property paired with its fully resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVariable {
    /// Dotted path of the source token (`surface.border`).
    pub token: String,
    /// Custom-property name (`--mond-surface-border`).
    pub name: String,
    pub value: String,
    pub scope: ThemeScope,
}
