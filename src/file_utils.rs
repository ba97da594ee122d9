//! Output file naming and writing
//!
//! The tree is written next to where the tool runs. Unless overwriting is
//! requested, an existing `structure.txt` is left alone and the first free
//! `structure(N).txt` is used instead.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::output::{OutputFile, PlainWriter};
use crate::tree::{TreeWalker, WalkStats};

/// Return the first of `base.ext`, `base(1).ext`, `base(2).ext`, ... that
/// does not exist in `dir`.
///
/// Nothing is reserved: another process may create the file before the caller does.
pub fn available_filename(dir: &Path, base_name: &str, extension: &str) -> PathBuf {
    let mut candidate = dir.join(format!("{}{}", base_name, extension));
    let mut counter = 0usize;
    while candidate.exists() {
        counter += 1;
        candidate = dir.join(format!("{}({}){}", base_name, counter, extension));
    }
    candidate
}

/// Pick the path the tree will be written to.
pub fn resolve_output_path(dir: &Path, output: &OutputFile) -> PathBuf {
    if output.overwrite {
        dir.join(output.file_name())
    } else {
        available_filename(dir, &output.base_name, &output.extension)
    }
}

/// Write the tree of `root` to a file in `dir`.
///
/// The file is created before the walk starts, so a creation failure leaves
/// nothing behind. Neither it nor earlier outputs of the same name family
/// (`base(N).ext`) appear in the listing. Returns the path written.
pub fn write_tree_file(
    walker: TreeWalker,
    root: &Path,
    dir: &Path,
    output: &OutputFile,
) -> Result<(PathBuf, WalkStats)> {
    let family = output.name_pattern();
    let family = Regex::new(&family).map_err(|source| Error::InvalidPattern {
        pattern: family.clone(),
        source,
    })?;

    let path = resolve_output_path(dir, output);
    debug!(path = %path.display(), "creating output file");

    let file = File::create(&path).map_err(|source| Error::Output {
        path: path.clone(),
        source,
    })?;

    // Compare against canonical entry paths so the file is skipped even when
    // `dir` and `root` are spelled differently.
    let skip = path.canonicalize().unwrap_or_else(|_| path.clone());
    let root = root.canonicalize().map_err(|e| Error::traversal(root, e))?;
    let walker = walker.with_skip_path(skip).with_skip_files(family);

    let mut writer = PlainWriter::new(BufWriter::new(file));
    let stats = walker.walk_streaming(&root, &mut writer)?;

    info!(
        path = %path.display(),
        directories = stats.directories,
        files = stats.files,
        merged = stats.merged,
        "wrote tree"
    );
    Ok((path, stats))
}
