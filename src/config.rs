//! Configuration file loading
//!
//! A config file is a JSON object holding the walker rules under `tree` and
//! the output file policy under `output`:
//!
//! ```json
//! {
//!   "tree": {
//!     "ignored_names": ["node_modules", ".git"],
//!     "ignored_extensions": [".log"],
//!     "ignored_name_patterns": ["^structure.*\\.txt$"],
//!     "merge_names": ["com", "example"],
//!     "sort_entries": true
//!   },
//!   "output": { "base_name": "structure", "extension": ".txt", "overwrite": false }
//! }
//! ```
//!
//! Missing fields take their defaults; unknown fields are an error.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::output::OutputFile;
use crate::tree::WalkerConfig;

/// Everything one run needs besides the root directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(rename = "tree")]
    pub walker: WalkerConfig,
    pub output: OutputFile,
}

impl Config {
    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
