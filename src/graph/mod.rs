//! Include graph model.
//!
//! `IncludeGraph` maps node keys (quoted, root-relative paths) to `ConfigNode`s.
//! An edge `a -> b` means "`a` is included by `b`". Nodes keep first-seen
//! order; children are kept sorted so exports are stable across runs.
use crate::errors::ConfigGraphError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigNode {
    pub key: String,
    pub children: BTreeSet<String>,
}

impl ConfigNode {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string(), children: BTreeSet::new() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IncludeGraph {
    nodes: Vec<ConfigNode>,
    // key -> position in `nodes`; rebuilt after deserialization
    #[serde(skip, default)]
    index: HashMap<String, usize>,
}

impl IncludeGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty node under `key`, replacing any existing node and its children.
    pub fn add_node(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.nodes[i] = ConfigNode::new(key),
            None => {
                self.index.insert(key.to_string(), self.nodes.len());
                self.nodes.push(ConfigNode::new(key));
            }
        }
    }

    fn ensure_node(&mut self, key: &str) -> usize {
        if let Some(&i) = self.index.get(key) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(key.to_string(), i);
        self.nodes.push(ConfigNode::new(key));
        i
    }

    /// Record `source -> dest`, creating either endpoint if absent.
    ///
    /// Existing nodes are never reset, so a destination that was already used
    /// as a source keeps its children. Duplicate edges collapse.
    pub fn add_edge(&mut self, source: &str, dest: &str) {
        tracing::debug!(source, dest, "adding edge");
        let src = self.ensure_node(source);
        self.ensure_node(dest);
        self.nodes[src].children.insert(dest.to_string());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.index.get(key).map(|&i| &self.nodes[i])
    }

    /// Children of `key`, or `None` if the node does not exist.
    #[must_use]
    pub fn children(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.get(key).map(|n| &n.children)
    }

    /// Node keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.key.as_str())
    }

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &ConfigNode> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.children.len()).sum()
    }

    /// Write every node key, one per line.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn dump<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for key in self.keys() {
            writeln!(out, "{key}")?;
        }
        Ok(())
    }

    /// Write the DOT description of this graph to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns `ConfigGraphError::Io` if the file cannot be written.
    pub fn export_graph_description(&self, path: &Path) -> Result<(), ConfigGraphError> {
        let dot = crate::visualization::DotGenerator::new().generate_dot(self);
        std::fs::write(path, dot).map_err(|e| ConfigGraphError::io(path, e))
    }

    /// Save the graph as pretty JSON.
    ///
    /// # Errors
    /// Returns `ConfigGraphError::Json` on encoding failure or `ConfigGraphError::Io` if writing fails.
    pub fn save_json(&self, path: &Path) -> Result<(), ConfigGraphError> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data).map_err(|e| ConfigGraphError::io(path, e))
    }

    /// Load a graph previously written by `save_json`.
    ///
    /// # Errors
    /// Returns `ConfigGraphError::Io` if reading fails or `ConfigGraphError::Json` if the JSON is invalid.
    pub fn load_json(path: &Path) -> Result<Self, ConfigGraphError> {
        let data = std::fs::read_to_string(path).map_err(|e| ConfigGraphError::io(path, e))?;
        let mut graph: IncludeGraph = serde_json::from_str(&data)?;
        graph.index =
            graph.nodes.iter().enumerate().map(|(i, n)| (n.key.clone(), i)).collect();
        Ok(graph)
    }
}
