//! Entry filtering for tree walking

use std::collections::HashSet;

use regex::Regex;
use tracing::warn;

use crate::error::{Error, Result};

use super::config::WalkerConfig;

/// Compiled exclusion and merge rules.
/// Built once from a `WalkerConfig`; pattern errors surface here, before any traversal.
#[derive(Debug)]
pub struct EntryFilter {
    names: HashSet<String>,
    extensions: Vec<String>,
    patterns: Vec<Regex>,
    merge_names: HashSet<String>,
}

impl EntryFilter {
    pub fn new(config: &WalkerConfig) -> Result<Self> {
        let patterns = config
            .ignored_name_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // An empty suffix would match every file name
        let mut extensions = Vec::with_capacity(config.ignored_extensions.len());
        for ext in &config.ignored_extensions {
            if ext.is_empty() {
                warn!("ignoring empty entry in ignored_extensions");
                continue;
            }
            extensions.push(ext.clone());
        }

        Ok(Self {
            names: config.ignored_names.iter().cloned().collect(),
            extensions,
            patterns,
            merge_names: config.merge_names.iter().cloned().collect(),
        })
    }

    /// Check if an entry should be left out of the tree.
    /// Directories are only excluded by exact name.
    pub fn is_excluded(&self, name: &str, is_dir: bool) -> bool {
        if self.names.contains(name) {
            return true;
        }
        if is_dir {
            return false;
        }
        self.patterns.iter().any(|re| re.is_match(name))
            || self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// Check if a directory name takes part in merge collapsing.
    pub fn is_mergeable(&self, name: &str) -> bool {
        self.merge_names.contains(name)
    }
}
