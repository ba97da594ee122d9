//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which outputs tree content
//! directly to stdout, for use with `TreeWalker` when no output file is wanted.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::StreamingOutput;

use super::config::OutputConfig;
use super::utils::connector;

/// Streaming output formatter - outputs directly to stdout.
/// Directories and merged pairs are drawn in bold blue when color is enabled.
pub struct StreamingFormatter {
    stdout: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_dir_name(&mut self, name: &str) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.stdout, "{}", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

impl StreamingOutput for StreamingFormatter {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.write_dir_name(name)
    }

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        write!(self.stdout, "{}{}", prefix, connector(is_last))?;
        if is_dir {
            self.write_dir_name(name)
        } else {
            writeln!(self.stdout, "{}", name)
        }
    }

    fn output_merged(&mut self, name: &str, prefix: &str) -> io::Result<()> {
        write!(self.stdout, "{}", prefix)?;
        self.write_dir_name(name)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
