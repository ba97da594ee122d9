//! Plain text formatter
//!
//! Writes the tree without colors to any `io::Write`. Used for the output
//! file and for rendering into memory.

use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::tree::{StreamingOutput, TreeWalker, WalkStats};

use super::utils::connector;

/// Uncolored line sink over an arbitrary writer.
pub struct PlainWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StreamingOutput for PlainWriter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", name)
    }

    fn output_node(
        &mut self,
        name: &str,
        _is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        writeln!(self.writer, "{}{}{}", prefix, connector(is_last), name)
    }

    fn output_merged(&mut self, name: &str, prefix: &str) -> io::Result<()> {
        writeln!(self.writer, "{}{}", prefix, name)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Walk `root` and return the tree as a string.
pub fn render_to_string(walker: &TreeWalker, root: &Path) -> Result<(String, WalkStats)> {
    let mut output = PlainWriter::new(Vec::new());
    let stats = walker.walk_streaming(root, &mut output)?;
    let text = String::from_utf8_lossy(&output.into_inner()).into_owned();
    Ok((text, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::WalkerConfig;

    #[test]
    fn test_example_tree() {
        let dir = TestDir::named("root");
        dir.add_file("a.txt");
        dir.add_file("b.log");
        dir.add_file("node_modules/x.txt");

        let config = WalkerConfig {
            ignored_names: vec!["node_modules".to_string()],
            ignored_extensions: vec![".log".to_string()],
            ..WalkerConfig::empty()
        };
        let walker = TreeWalker::new(&config).unwrap();
        let (text, stats) = render_to_string(&walker, dir.path()).unwrap();
        assert_eq!(text, "root\n└── a.txt\n");
        assert_eq!(stats.files, 1);
        assert_eq!(stats.directories, 0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let dir = TestDir::new();
        dir.add_file("src/lib.rs");
        dir.add_file("src/tree/mod.rs");
        dir.add_file("Cargo.toml");
        dir.add_file("com/example/Main.java");

        let config = WalkerConfig {
            merge_names: vec!["com".to_string(), "example".to_string()],
            ..WalkerConfig::default()
        };
        let walker = TreeWalker::new(&config).unwrap();
        let (first, _) = render_to_string(&walker, dir.path()).unwrap();
        let (second, _) = render_to_string(&walker, dir.path()).unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with('\n'));
    }

    #[test]
    fn test_merged_line_has_no_connector() {
        let mut output = PlainWriter::new(Vec::new());
        output.output_merged("com.example", "│   ").unwrap();
        output.output_node("Main.java", false, true, "│       ").unwrap();
        let text = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(text, "│   com.example\n│       └── Main.java\n");
    }
}
