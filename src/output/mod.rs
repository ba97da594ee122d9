//! Tree formatting and display
//!
//! This module provides sinks for the lines produced by `TreeWalker`:
//!
//! - `config` - Output configuration types (console options, output file naming)
//! - `utils` - Connector glyphs
//! - `plain` - Uncolored writer for files and in-memory rendering
//! - `streaming` - Colored formatter for stdout

mod config;
mod plain;
mod streaming;
mod utils;

// Re-export public types and functions
pub use config::{OutputConfig, OutputFile};
pub use plain::{PlainWriter, render_to_string};
pub use streaming::StreamingFormatter;
pub use utils::{BRANCH, CORNER, connector};
