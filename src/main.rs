//! CLI entry point for treescribe

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use treescribe::{
    Config, Error, OutputConfig, OutputFile, Result, StreamingFormatter, TreeWalker, WalkerConfig,
    write_tree_file,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treescribe")]
#[command(about = "Write a filtered directory tree to a text file")]
#[command(version)]
struct Args {
    /// Directory to describe
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Load rules and output settings from a JSON config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip files and directories with this exact name (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Skip files whose name ends with this suffix, e.g. ".log" (can be used multiple times)
    #[arg(short = 'e', long = "ignore-ext", value_name = "SUFFIX")]
    ignore_ext: Vec<String>,

    /// Skip files whose name matches this regex (can be used multiple times)
    #[arg(short = 'p', long = "ignore-pattern", value_name = "REGEX")]
    ignore_pattern: Vec<String>,

    /// Directory name eligible for collapsing single-child chains (can be used multiple times)
    #[arg(short = 'm', long = "merge", value_name = "NAME")]
    merge: Vec<String>,

    /// Start from empty rule sets instead of the built-in defaults
    #[arg(long = "no-defaults", conflicts_with = "config")]
    no_defaults: bool,

    /// Keep the filesystem's listing order instead of sorting by name
    #[arg(long = "unsorted")]
    unsorted: bool,

    /// Output file name (default: structure.txt in the current directory)
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Overwrite the output file instead of choosing a numbered name
    #[arg(long = "overwrite", conflicts_with = "stdout")]
    overwrite: bool,

    /// Print the tree to stdout instead of writing a file
    #[arg(long = "stdout")]
    stdout: bool,

    /// Control color output for --stdout: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        if e.is_config() {
            eprintln!("treescribe: configuration error: {}", e);
        } else {
            eprintln!("treescribe: {}", e);
        }
        process::exit(1);
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "treescribe=info",
        1 => "treescribe=debug",
        _ => "treescribe=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr),
        )
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;

    // Patterns compile here, before the output file exists
    let walker = TreeWalker::new(&config.walker)?;

    let root = args
        .path
        .canonicalize()
        .map_err(|e| Error::traversal(&args.path, e))?;
    if !root.is_dir() {
        return Err(Error::traversal(
            &root,
            io::Error::new(io::ErrorKind::NotADirectory, "Not a directory"),
        ));
    }

    if args.stdout {
        let mut formatter = StreamingFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
        });
        let stats = walker.walk_streaming(&root, &mut formatter)?;
        info!(
            directories = stats.directories,
            files = stats.files,
            merged = stats.merged,
            "printed tree"
        );
        return Ok(());
    }

    let cwd = std::env::current_dir().map_err(|source| Error::Output {
        path: PathBuf::from("."),
        source,
    })?;
    let (dir, output) = output_target(&cwd, args.output.as_deref(), config.output, args.overwrite);
    write_tree_file(walker, &root, &dir, &output)?;
    Ok(())
}

/// Merge the config file (or built-in defaults) with command-line rules.
fn build_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if args.no_defaults {
        config.walker = WalkerConfig::empty();
    }

    let walker = &mut config.walker;
    walker.ignored_names.extend(args.ignore.iter().cloned());
    walker.ignored_extensions.extend(args.ignore_ext.iter().cloned());
    walker.ignored_name_patterns.extend(args.ignore_pattern.iter().cloned());
    walker.merge_names.extend(args.merge.iter().cloned());
    if args.unsorted {
        walker.sort_entries = false;
    }

    Ok(config)
}

/// Directory and naming policy for the output file. `--output` may carry a
/// directory part, resolved against the current directory.
fn output_target(
    cwd: &Path,
    output: Option<&Path>,
    configured: OutputFile,
    overwrite: bool,
) -> (PathBuf, OutputFile) {
    let mut file = configured;
    let mut dir = cwd.to_path_buf();

    if let Some(path) = output {
        if let Some(name) = path.file_name() {
            file = OutputFile::from_file_name(&name.to_string_lossy(), file.overwrite);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            dir = cwd.join(parent);
        }
    }
    if overwrite {
        file.overwrite = true;
    }

    (dir, file)
}
