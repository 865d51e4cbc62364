use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "xcconfig-graph",
    version,
    about = "Graph #include relationships between .xcconfig files",
    long_about = "Scan the enclosing git repository for .xcconfig files, follow their #include and #include? directives, print every file key and write the include graph to <root>/config.dot. Paths containing 'third-party' or 'submodules' are skipped."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Suppress the key listing and all non-error logs
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
    #[command(flatten)]
    pub scan: ScanArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Args, Default)]
pub struct ScanArgs {
    /// Directory to start repository-root discovery from
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,
    /// Use this directory as the root instead of asking git
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Path to a TOML configuration file (default: <root>/xcconfig-graph.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// DOT output file (default: <root>/config.dot)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Skip files whose path contains this text; repeat to build the list (replaces defaults)
    #[arg(long, value_name = "SUBSTR")]
    pub ignore: Vec<String>,
    /// Configuration file extension to scan
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
    /// Also write the graph as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
    /// Also render the graph to SVG with Graphviz
    #[arg(long)]
    pub svg: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print shell completion script
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
