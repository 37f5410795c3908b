//! CLI entry point for dirjson

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use dirjson::{
    Error, TreeFormatter, TreeWalker, WalkerConfig, filter_tree, overview, print_json,
    print_overview, print_stats, read_json, summarize, write_json,
};
use tracing::{Level, debug, info};

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

/// Diagnostic log verbosity (written to stderr)
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
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
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirjson")]
#[command(about = "Save a directory hierarchy as a JSON document")]
#[command(version)]
struct Args {
    /// Directory to traverse (with --view, a saved structure document)
    directory_path: PathBuf,

    /// Output file name, created next to the traversed directory
    #[arg(required_unless_present_any = ["stdout", "view"])]
    output_filename: Option<PathBuf>,

    /// Print the JSON document to stdout instead of writing a file
    #[arg(long = "stdout", conflicts_with = "view")]
    stdout: bool,

    /// Display a saved structure document as a tree instead of traversing
    #[arg(long = "view")]
    view: bool,

    /// Only show entries whose name contains TEXT (case-insensitive), with their parents
    #[arg(long = "find", value_name = "TEXT", requires = "view")]
    find: Option<String>,

    /// Show per-section counts for each top-level directory instead of the tree
    #[arg(long = "overview", requires = "view")]
    overview: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Diagnostic log level
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "off")]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

/// The output file goes in the parent of the traversed directory, not inside it.
fn output_location(directory: &Path, filename: &Path) -> PathBuf {
    match directory.parent() {
        Some(parent) => parent.join(filename),
        None => directory.join(filename),
    }
}

fn stdout_error(e: io::Error) -> Error {
    Error::write("<stdout>", e)
}

fn run(args: &Args) -> Result<(), Error> {
    if args.view {
        return view(args);
    }

    let root = &args.directory_path;
    let walker = TreeWalker::new(WalkerConfig::default());

    match &args.output_filename {
        Some(filename) if !args.stdout => save(args, &walker, root, filename),
        _ => {
            let tree = walker.walk(root)?;
            info!(root = %root.display(), "structure built");
            print_json(&tree).map_err(stdout_error)
        }
    }
}

/// Traverse `root`, write the document next to it, and print statistics.
fn save(args: &Args, walker: &TreeWalker, root: &Path, filename: &Path) -> Result<(), Error> {
    // A missing root prints only the error message
    walker.check_root(root)?;
    println!("Traversing: {}", root.display());
    let tree = walker.walk(root)?;

    let output_file = output_location(root, filename);
    write_json(&tree, &output_file)?;
    println!("Structure saved to: {}", output_file.display());

    let stats = summarize(&tree);
    debug!(?stats, "summary");
    print_stats(&stats, should_use_color(args.color)).map_err(stdout_error)
}

/// Load a saved document and display it, optionally pruned by name.
fn view(args: &Args) -> Result<(), Error> {
    let tree = read_json(&args.directory_path)?;
    let use_color = should_use_color(args.color);

    let tree = match &args.find {
        Some(query) => match filter_tree(&tree, query) {
            Some(pruned) => pruned,
            None => {
                println!("No matching nodes.");
                return Ok(());
            }
        },
        None => tree,
    };

    if args.overview {
        print_overview(&overview(&tree), use_color).map_err(stdout_error)
    } else {
        TreeFormatter::new(use_color)
            .print(&tree)
            .map_err(stdout_error)
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("parsed CLI arguments: {args:?}");

    match run(&args) {
        Ok(()) => {}
        Err(Error::NotFound { path }) => {
            println!("Error: {} does not exist", path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("dirjson: {}", e);
            process::exit(1);
        }
    }
}
