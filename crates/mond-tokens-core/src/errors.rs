use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Required token source not found: {}", .path.display())]
    MissingSource { path: PathBuf },
    #[error("Failed to read token source {}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("Failed to parse token source {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize theme object")]
    Serialize(#[source] serde_json::Error),
    #[error("Unknown brand '{brand}'")]
    UnknownBrand { brand: String },
    #[error("Unresolved reference '{reference}' in token '{token}'")]
    UnresolvedReference { token: String, reference: String },
    #[error("Circular reference: {}", .chain.join(" -> "))]
    CircularReference { chain: Vec<String> },
    #[error("Primitive token '{path}' declares light/dark modes")]
    ModeInPrimitive { path: String },
    #[error("Invalid token path '{path}'")]
    InvalidPath { path: String },
}

pub type Result<T, E = TokenError> = std::result::Result<T, E>;
