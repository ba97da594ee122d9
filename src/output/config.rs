//! Output configuration types

use serde::Deserialize;

const DEFAULT_BASE_NAME: &str = "structure";
const DEFAULT_EXTENSION: &str = ".txt";

/// Configuration for console output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

/// Naming policy for the output file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputFile {
    pub base_name: String,
    /// Appended verbatim, including the leading dot.
    pub extension: String,
    /// Rewrite `base_name + extension` every run instead of picking a free
    /// numbered name.
    pub overwrite: bool,
}

impl OutputFile {
    /// Split a file name like `tree.txt` into base name and extension.
    /// A name without a dot gets an empty extension.
    pub fn from_file_name(file_name: &str, overwrite: bool) -> Self {
        let (base_name, extension) = match file_name.rfind('.') {
            Some(idx) if idx > 0 => (&file_name[..idx], &file_name[idx..]),
            _ => (file_name, ""),
        };
        Self {
            base_name: base_name.to_string(),
            extension: extension.to_string(),
            overwrite,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }

    /// Regex matching every name this policy can produce: the plain name and
    /// each numbered variant `base(N).ext`.
    pub fn name_pattern(&self) -> String {
        format!(
            r"^{}(\(\d+\))?{}$",
            regex::escape(&self.base_name),
            regex::escape(&self.extension)
        )
    }
}

impl Default for OutputFile {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            overwrite: false,
        }
    }
}
