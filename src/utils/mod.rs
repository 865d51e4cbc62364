pub mod config {
    use crate::errors::ConfigGraphError;
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Default config file name, looked up at the repository root.
    pub const CONFIG_FILE_NAME: &str = "xcconfig-graph.toml";

    #[derive(Debug, Clone, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    pub struct ScanSection {
        pub ignore: Option<Vec<String>>,
        pub extension: Option<String>,
        pub marker: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    pub struct OutputSection {
        pub dot: Option<String>, // relative to the root
        pub json: Option<String>,
        pub svg: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        pub scan: Option<ScanSection>,
        pub output: Option<OutputSection>,
    }

    #[must_use]
    pub fn default_config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Load and parse a TOML config file.
    ///
    /// # Errors
    /// Returns `ConfigGraphError::Io` if the file cannot be read and
    /// `ConfigGraphError::Config` if it is not valid TOML for `Config`.
    pub fn load_config_at(path: &Path) -> Result<Config, ConfigGraphError> {
        let data = fs::read_to_string(path).map_err(|e| ConfigGraphError::io(path, e))?;
        toml::from_str::<Config>(&data).map_err(|e| ConfigGraphError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `xcconfig-graph.toml` from `root` if present.
    ///
    /// # Errors
    /// Same as `load_config_at` when the file exists.
    pub fn load_config_near(root: &Path) -> Result<Option<Config>, ConfigGraphError> {
        let path = default_config_path(root);
        if path.is_file() {
            load_config_at(&path).map(Some)
        } else {
            Ok(None)
        }
    }
}

pub mod file_walker {
    use std::path::{Path, PathBuf};

    /// Discover files ending in `.{extension}` under `root`.
    ///
    /// Hidden entries are skipped and symlinks are not followed; `.gitignore`
    /// rules are not consulted. Results are ordered by path.
    #[must_use]
    pub fn files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
        let mut walker = ignore::WalkBuilder::new(root);
        walker
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let mut out = Vec::new();
        for entry in walker.build() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if entry.path().extension() == Some(std::ffi::OsStr::new(extension)) {
                out.push(entry.into_path());
            }
        }
        out
    }
}

pub mod project_root {
    use crate::errors::ConfigGraphError;
    use std::path::{Path, PathBuf};
    use std::process::Command;

    /// Ask git for the top-level directory of the repository containing `start`.
    ///
    /// # Errors
    /// Returns `ConfigGraphError::Git` if git cannot be run and
    /// `ConfigGraphError::NotARepository` if `start` is not inside a work tree.
    pub fn locate_root(start: &Path) -> Result<PathBuf, ConfigGraphError> {
        let output = Command::new("git")
            .arg("rev-parse")
            .arg("--show-toplevel")
            .current_dir(start)
            .output()
            .map_err(ConfigGraphError::Git)?;
        let top = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() || top.is_empty() {
            return Err(ConfigGraphError::NotARepository {
                path: start.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(PathBuf::from(top))
    }
}

pub mod paths {
    use std::path::{Component, Path, PathBuf};

    /// Lexically normalize `path`: drop `.` and fold `..` into its parent.
    ///
    /// The filesystem is not consulted, so missing files and symlinks are fine.
    #[must_use]
    pub fn normalize(path: &Path) -> PathBuf {
        let mut out = PathBuf::new();
        for comp in path.components() {
            match comp {
                Component::CurDir => {}
                Component::ParentDir => {
                    let can_pop = matches!(
                        out.components().next_back(),
                        Some(Component::Normal(_))
                    );
                    if can_pop {
                        out.pop();
                    } else if !out.has_root() {
                        out.push("..");
                    }
                }
                other => out.push(other.as_os_str()),
            }
        }
        out
    }

    /// Relative path from directory `base` to `path`, both normalized first.
    ///
    /// Yields `..` components when `path` lies outside `base`, and `.` when equal.
    #[must_use]
    pub fn relative_to(path: &Path, base: &Path) -> String {
        let path = normalize(path);
        let base = normalize(base);
        let p: Vec<Component> = path.components().collect();
        let b: Vec<Component> = base.components().collect();
        let common = p.iter().zip(b.iter()).take_while(|(x, y)| x == y).count();

        let mut parts: Vec<String> = Vec::new();
        for _ in common..b.len() {
            parts.push("..".to_string());
        }
        for c in &p[common..] {
            parts.push(c.as_os_str().to_string_lossy().into_owned());
        }
        if parts.is_empty() {
            ".".to_string()
        } else {
            parts.join("/")
        }
    }

    /// Node key for `path`: its root-relative form wrapped in double quotes.
    #[must_use]
    pub fn node_key(root: &Path, path: &Path) -> String {
        format!("\"{}\"", relative_to(path, root))
    }
}
