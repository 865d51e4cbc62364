use crate::cli::{Cli, Commands, ScanArgs};
use crate::errors::ConfigGraphError;
use crate::graph::IncludeGraph;
use crate::scanner::{ScanConfig, Scanner};
use crate::utils::{config, project_root};
use crate::visualization::SvgGenerator;
use clap::CommandFactory;
use clap_complete::generate;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("xcconfig_graph={level}")));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let mut out = io::stdout();
        generate(shell, &mut cmd, "xcconfig-graph", &mut out);
        return 0;
    }
    match run_scan(&cli.scan, cli.quiet) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Resolve settings, scan, print keys and write every requested artifact.
///
/// Nothing is written unless the whole scan succeeds.
///
/// # Errors
/// Returns the first root-discovery, configuration, scan, or output error.
pub fn run_scan(args: &ScanArgs, quiet: bool) -> Result<IncludeGraph, ConfigGraphError> {
    let root = match &args.root {
        Some(r) => r.clone(),
        None if args.path.as_os_str().is_empty() => project_root::locate_root(Path::new("."))?,
        None => project_root::locate_root(&args.path)?,
    };

    let file_cfg = match &args.config {
        Some(p) => Some(config::load_config_at(p)?),
        None => config::load_config_near(&root)?,
    };
    let mut scan_cfg = ScanConfig::default();
    if let Some(cfg) = &file_cfg {
        scan_cfg.merge(cfg);
    }
    if !args.ignore.is_empty() {
        scan_cfg.ignore.clone_from(&args.ignore);
    }
    if let Some(ext) = &args.extension {
        scan_cfg.extension = ext.trim_start_matches('.').to_string();
    }

    let scanner = Scanner::new(root, scan_cfg);
    tracing::info!(root = %scanner.root().display(), "scanning");
    let graph = scanner.scan()?;

    if !quiet {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        graph.dump(&mut lock).map_err(|e| ConfigGraphError::io("<stdout>", e))?;
        lock.flush().map_err(|e| ConfigGraphError::io("<stdout>", e))?;
    }

    let dot_path = args.output.clone().unwrap_or_else(|| scanner.output_path());
    graph.export_graph_description(&dot_path)?;
    tracing::info!(path = %dot_path.display(), "wrote DOT");

    // Config-file output paths are relative to the root; CLI paths win.
    let outputs = file_cfg.and_then(|c| c.output).unwrap_or_default();
    let json_path = args.json.clone().or_else(|| outputs.json.map(|p| scanner.root().join(p)));
    let svg_path = args.svg.clone().or_else(|| outputs.svg.map(|p| scanner.root().join(p)));

    if let Some(path) = json_path {
        graph.save_json(&path)?;
        tracing::info!(path = %path.display(), "wrote JSON");
    }
    if let Some(path) = svg_path {
        write_svg(&graph, &path)?;
    }
    Ok(graph)
}

fn write_svg(graph: &IncludeGraph, path: &Path) -> Result<(), ConfigGraphError> {
    let svg = SvgGenerator::new().generate_svg(graph)?;
    std::fs::write(path, svg).map_err(|e| ConfigGraphError::io(path, e))?;
    tracing::info!(path = %path.display(), "wrote SVG");
    Ok(())
}
