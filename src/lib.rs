//! Treescribe - writes a filtered directory tree to a text file

pub mod config;
pub mod error;
pub mod file_utils;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use file_utils::{available_filename, write_tree_file};
pub use output::{OutputConfig, OutputFile, PlainWriter, StreamingFormatter, render_to_string};
pub use tree::{StreamingOutput, TreeWalker, WalkStats, WalkerConfig};
