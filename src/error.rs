//! Error types for treescribe

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a run. No variant is retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A pattern in `ignored_name_patterns` failed to compile.
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The configuration file could not be read.
    #[error("cannot read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON or has unknown fields.
    #[error("invalid config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output file could not be created.
    #[error("cannot create output file '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory could not be listed during the walk.
    #[error("cannot read directory '{}': {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output sink failed.
    #[error("error writing tree output: {0}")]
    Write(#[from] io::Error),
}

impl Error {
    pub fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while loading or compiling configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::ConfigRead { .. } | Self::ConfigParse { .. }
        )
    }
}
