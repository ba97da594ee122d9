//! TreeWalker - streams a filtered directory tree to an output sink

use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, trace};

use crate::error::Result;

use super::config::WalkerConfig;
use super::filter::EntryFilter;
use super::traversal::{
    DirEntry, child_prefix, merged_child_prefix, read_entries, root_name, sole_subdirectory,
};

/// Callback for streaming output - receives one call per emitted line.
pub trait StreamingOutput {
    /// The first line: the root directory's name.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    /// A regular entry, drawn with a connector after `prefix`.
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()>;

    /// A collapsed `parent.child` directory pair, drawn without a connector.
    fn output_merged(&mut self, name: &str, prefix: &str) -> io::Result<()>;

    /// Called once after the last line.
    fn finish(&mut self) -> io::Result<()>;
}

/// Counts of what a walk emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub directories: usize,
    pub files: usize,
    /// Collapsed pairs; each also counts as two directories.
    pub merged: usize,
}

/// Depth-first tree walker that writes each line as soon as it is known.
/// Uses O(depth) memory beyond the listing of the directory being visited.
#[derive(Debug)]
pub struct TreeWalker {
    filter: EntryFilter,
    sort_entries: bool,
    skip_path: Option<PathBuf>,
    skip_files: Option<Regex>,
}

impl TreeWalker {
    /// Compile the configuration. Fails on a malformed ignore pattern.
    pub fn new(config: &WalkerConfig) -> Result<Self> {
        Ok(Self {
            filter: EntryFilter::new(config)?,
            sort_entries: config.sort_entries,
            skip_path: None,
            skip_files: None,
        })
    }

    /// Never list this exact path (used for the output file of the run).
    pub fn with_skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip_path = Some(path.into());
        self
    }

    /// Never list files whose name matches `pattern`, at any depth.
    pub fn with_skip_files(mut self, pattern: Regex) -> Self {
        self.skip_files = Some(pattern);
        self
    }

    /// Walk `root`, streaming every visible entry to `output`, then finish the sink.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkStats> {
        let mut stats = WalkStats::default();
        output.output_root(&root_name(root))?;
        self.walk_dir(root, "", output, &mut stats)?;
        output.finish()?;
        Ok(stats)
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
        stats: &mut WalkStats,
    ) -> Result<()> {
        let entries = self.visible_entries(path)?;
        debug!(path = %path.display(), entries = entries.len(), "listing directory");

        let total = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i == total - 1;

            if !entry.is_dir {
                output.output_node(&entry.name, false, is_last, prefix)?;
                stats.files += 1;
                continue;
            }

            if let Some(inner) = self.merge_partner(&entry)? {
                let merged_name = format!("{}.{}", entry.name, inner.name);
                debug!(
                    path = %entry.path.display(),
                    merged = %merged_name,
                    "collapsing directories"
                );
                output.output_merged(&merged_name, prefix)?;
                stats.directories += 2;
                stats.merged += 1;
                self.walk_dir(&inner.path, &merged_child_prefix(prefix), output, stats)?;
                continue;
            }

            output.output_node(&entry.name, true, is_last, prefix)?;
            stats.directories += 1;
            self.walk_dir(&entry.path, &child_prefix(prefix, is_last), output, stats)?;
        }

        Ok(())
    }

    /// Read, sort, and filter the children of a directory.
    fn visible_entries(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = read_entries(path, self.sort_entries)?;
        Ok(entries
            .into_iter()
            .filter(|entry| {
                if self.skip_path.as_deref() == Some(entry.path.as_path()) {
                    return false;
                }
                if !entry.is_dir
                    && self.skip_files.as_ref().is_some_and(|re| re.is_match(&entry.name))
                {
                    return false;
                }
                let excluded = self.filter.is_excluded(&entry.name, entry.is_dir);
                if excluded {
                    trace!(path = %entry.path.display(), "excluded");
                }
                !excluded
            })
            .collect())
    }

    /// The subdirectory to collapse `entry` with, if the merge rule applies.
    fn merge_partner(&self, entry: &DirEntry) -> Result<Option<DirEntry>> {
        if !self.filter.is_mergeable(&entry.name) {
            return Ok(None);
        }
        Ok(sole_subdirectory(&entry.path)?.filter(|inner| self.filter.is_mergeable(&inner.name)))
    }
}
