//! Configuration types for the tree walker

use serde::Deserialize;

const DEFAULT_IGNORED_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "build",
    ".settings",
    ".project",
    ".mvn",
    ".classpath",
    ".factorypath",
    "HELP.md",
];

const DEFAULT_IGNORED_EXTENSIONS: &[&str] = &[".class", ".jar", ".war", ".log"];

/// Keeps the tool's own output files (and the generator script it replaced)
/// out of the listing.
const DEFAULT_IGNORED_NAME_PATTERNS: &[&str] = &[r"^generateTree.*\.js$", r"^structure.*\.txt$"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkerConfig {
    /// Exact names skipped for both files and directories.
    pub ignored_names: Vec<String>,
    /// File name suffixes to skip (directories are never matched).
    pub ignored_extensions: Vec<String>,
    /// Regex sources; a file is skipped if its name matches any of them.
    pub ignored_name_patterns: Vec<String>,
    /// Directory names eligible for single-child collapsing.
    pub merge_names: Vec<String>,
    /// Sort each listing by name. When false the filesystem's enumeration
    /// order is kept, which differs between platforms.
    pub sort_entries: bool,
}

impl WalkerConfig {
    /// A configuration with every rule set empty.
    pub fn empty() -> Self {
        Self {
            ignored_names: Vec::new(),
            ignored_extensions: Vec::new(),
            ignored_name_patterns: Vec::new(),
            merge_names: Vec::new(),
            sort_entries: true,
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignored_names: to_strings(DEFAULT_IGNORED_NAMES),
            ignored_extensions: to_strings(DEFAULT_IGNORED_EXTENSIONS),
            ignored_name_patterns: to_strings(DEFAULT_IGNORED_NAME_PATTERNS),
            merge_names: Vec::new(),
            sort_entries: true,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_build_output() {
        let config = WalkerConfig::default();
        assert!(config.ignored_names.iter().any(|n| n == "node_modules"));
        assert!(config.ignored_names.iter().any(|n| n == ".git"));
        assert!(config.ignored_extensions.iter().any(|e| e == ".log"));
        assert!(config.merge_names.is_empty());
        assert!(config.sort_entries);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: WalkerConfig = serde_json::from_str(r#"{"merge_names": ["com"]}"#).unwrap();
        assert_eq!(config.merge_names, vec!["com"]);
        assert_eq!(config.ignored_names, WalkerConfig::default().ignored_names);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<WalkerConfig, _> = serde_json::from_str(r#"{"ignore_list": []}"#);
        assert!(result.is_err());
    }
}
