//! Directory tree walking logic
//!
//! `TreeWalker` reads one directory at a time, drops entries excluded by the
//! configured rules, and streams a line per surviving entry to a
//! `StreamingOutput` sink, collapsing eligible single-child directory pairs
//! into one line.

mod config;
mod filter;
mod traversal;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::EntryFilter;
pub use traversal::{DirEntry, read_entries, sole_subdirectory};
pub use walker::{StreamingOutput, TreeWalker, WalkStats};
