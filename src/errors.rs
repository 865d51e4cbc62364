use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("include directive has no quoted path: {line}")]
    MissingQuotedPath { line: String },
}

#[derive(Debug, Error)]
pub enum ConfigGraphError {
    #[error("not inside a git repository ({path}): {message}")]
    NotARepository { path: PathBuf, message: String },

    #[error("failed to run git: {0}")]
    Git(#[source] std::io::Error),

    #[error("IO error on {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Parse error in file {file} at line {line}: {source}")]
    Parse { file: PathBuf, line: usize, source: ParseError },

    #[error("Invalid configuration {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Visualization error: {0}")]
    Visualization(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigGraphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
