//! Repository scanner: finds xcconfig files and turns their include directives into edges.
//!
//! Include paths are resolved against the including file's directory by
//! `resolve_include`; the process working directory is never changed.
use crate::errors::ConfigGraphError;
use crate::graph::IncludeGraph;
use crate::parser::{parse_includes, INCLUDE_MARKER};
use crate::utils::config::Config;
use crate::utils::{file_walker, paths, project_root};
use std::path::{Path, PathBuf};

/// Path fragments marking vendored code that is never scanned.
pub const DEFAULT_IGNORE: [&str; 2] = ["third-party", "submodules"];
pub const DEFAULT_EXTENSION: &str = "xcconfig";
/// DOT artifact location, relative to the repository root.
pub const DEFAULT_OUTPUT: &str = "config.dot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub ignore: Vec<String>,
    pub extension: String,
    pub marker: String,
    pub output: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| (*s).to_string()).collect(),
            extension: DEFAULT_EXTENSION.to_string(),
            marker: INCLUDE_MARKER.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ScanConfig {
    /// Overlay values present in a loaded TOML config.
    pub fn merge(&mut self, cfg: &Config) {
        if let Some(scan) = &cfg.scan {
            if let Some(v) = &scan.ignore {
                self.ignore.clone_from(v);
            }
            if let Some(v) = &scan.extension {
                self.extension = v.trim_start_matches('.').to_string();
            }
            if let Some(v) = &scan.marker {
                self.marker.clone_from(v);
            }
        }
        if let Some(v) = cfg.output.as_ref().and_then(|o| o.dot.as_ref()) {
            self.output = PathBuf::from(v);
        }
    }
}

/// Absolute, normalized path of `relative` as seen from `base_dir`.
///
/// An absolute `relative` replaces `base_dir` entirely.
#[must_use]
pub fn resolve_include(base_dir: &Path, relative: &str) -> PathBuf {
    paths::normalize(&base_dir.join(relative))
}

#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    config: ScanConfig,
}

impl Scanner {
    /// Scanner over an explicit root directory.
    pub fn new(root: impl Into<PathBuf>, config: ScanConfig) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root: paths::normalize(&root), config }
    }

    /// Scanner rooted at the git top-level directory containing `start`.
    ///
    /// # Errors
    /// Propagates `project_root::locate_root` failures.
    pub fn discover(start: &Path, config: ScanConfig) -> Result<Self, ConfigGraphError> {
        let root = project_root::locate_root(start)?;
        tracing::info!(root = %root.display(), "using repository root");
        Ok(Self::new(root, config))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Where the DOT artifact goes.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.config.output)
    }

    #[must_use]
    pub fn key_for(&self, path: &Path) -> String {
        paths::node_key(&self.root, path)
    }

    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        let full = path.to_string_lossy();
        self.config.ignore.iter().any(|pat| full.contains(pat.as_str()))
    }

    #[must_use]
    pub fn config_files(&self) -> Vec<PathBuf> {
        file_walker::files_with_extension(&self.root, &self.config.extension)
    }

    /// Scan every non-ignored config file under the root.
    ///
    /// # Errors
    /// Fails on the first unreadable file or malformed include directive.
    pub fn scan(&self) -> Result<IncludeGraph, ConfigGraphError> {
        let mut graph = IncludeGraph::new();
        let mut scanned = 0usize;
        for file in self.config_files() {
            if self.is_ignored(&file) {
                tracing::debug!(file = %file.display(), "ignored");
                continue;
            }
            self.scan_file(&file, &mut graph)?;
            scanned += 1;
        }
        tracing::info!(
            files = scanned,
            nodes = graph.len(),
            edges = graph.edge_count(),
            "scan complete"
        );
        Ok(graph)
    }

    /// Add the edges contributed by one file; returns how many directives it had.
    ///
    /// Each include yields `included -> file`; includes of ignored paths are dropped.
    ///
    /// # Errors
    /// Returns `ConfigGraphError::Io` if the file cannot be read and
    /// `ConfigGraphError::Parse` for a directive without a quoted path.
    pub fn scan_file(&self, file: &Path, graph: &mut IncludeGraph) -> Result<usize, ConfigGraphError> {
        let file = paths::normalize(file);
        let content =
            std::fs::read_to_string(&file).map_err(|e| ConfigGraphError::io(&file, e))?;
        let includes = parse_includes(&content, &self.config.marker).map_err(|(line, source)| {
            ConfigGraphError::Parse { file: file.clone(), line, source }
        })?;

        let key = self.key_for(&file);
        let base_dir = file.parent().unwrap_or(self.root.as_path());
        for (_, relative) in &includes {
            let included = resolve_include(base_dir, relative);
            if self.is_ignored(&included) {
                tracing::debug!(file = %key, included = %included.display(), "ignored include");
                continue;
            }
            graph.add_edge(&self.key_for(&included), &key);
        }
        tracing::debug!(file = %key, includes = includes.len(), "scanned");
        Ok(includes.len())
    }
}
