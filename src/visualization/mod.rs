use crate::errors::ConfigGraphError;
use crate::graph::IncludeGraph;
use std::fmt::Write as _;

#[derive(Debug, Default)]
pub struct DotGenerator;

impl DotGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Render `graph` as DOT.
    ///
    /// Only nodes with at least one child get a block; keys are already quoted
    /// and are emitted verbatim.
    #[must_use]
    pub fn generate_dot(&self, graph: &IncludeGraph) -> String {
        let mut s = String::from("digraph D {\n");
        for node in graph.nodes() {
            if node.children.is_empty() {
                continue;
            }
            let _ = writeln!(s, "\t{} -> {{", node.key);
            let last = node.children.len() - 1;
            for (i, child) in node.children.iter().enumerate() {
                let sep = if i < last { "," } else { "" };
                let _ = writeln!(s, "\t\t{child}{sep}");
            }
            s.push_str("\t}\n\n");
        }
        s.push_str("}\n");
        s
    }
}

#[derive(Debug, Default)]
pub struct SvgGenerator;

impl SvgGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Render `graph` to SVG by piping its DOT through Graphviz.
    ///
    /// # Errors
    /// Returns `ConfigGraphError::Visualization` if `dot` cannot be spawned,
    /// exits unsuccessfully, or produces invalid UTF-8.
    pub fn generate_svg(&self, graph: &IncludeGraph) -> Result<String, ConfigGraphError> {
        let dot = DotGenerator::new().generate_dot(graph);
        let output = std::process::Command::new("dot")
            .arg("-Tsvg")
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .spawn()
            .and_then(|mut child| {
                use std::io::Write;
                if let Some(stdin) = child.stdin.as_mut() {
                    stdin.write_all(dot.as_bytes())?;
                }
                child.wait_with_output()
            })
            .map_err(|e| {
                ConfigGraphError::Visualization(format!("Failed to run graphviz 'dot': {e}"))
            })?;
        if !output.status.success() {
            return Err(ConfigGraphError::Visualization(format!(
                "Graphviz 'dot' failed with code {:?}",
                output.status.code()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| ConfigGraphError::Visualization(format!("Invalid UTF-8 from dot: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_is_header_and_footer() {
        let g = IncludeGraph::new();
        assert_eq!(DotGenerator::new().generate_dot(&g), "digraph D {\n}\n");
    }

    #[test]
    fn one_block_per_parent_with_children_listed() {
        let mut g = IncludeGraph::new();
        g.add_edge("\"A\"", "\"C\"");
        g.add_edge("\"A\"", "\"B\"");
        let got = DotGenerator::new().generate_dot(&g);
        assert_eq!(got, "digraph D {\n\t\"A\" -> {\n\t\t\"B\",\n\t\t\"C\"\n\t}\n\n}\n");
        assert!(!got.contains("\"B\" ->"));
        assert!(!got.contains("\"C\" ->"));
    }

    #[test]
    fn childless_nodes_are_omitted() {
        let mut g = IncludeGraph::new();
        g.add_node("\"lonely\"");
        g.add_edge("\"x\"", "\"y\"");
        let got = DotGenerator::new().generate_dot(&g);
        assert!(!got.contains("lonely"));
        assert_eq!(got.matches(" -> {").count(), 1);
    }

    #[test]
    fn blocks_follow_node_order() {
        let mut g = IncludeGraph::new();
        g.add_edge("\"b\"", "\"x\"");
        g.add_edge("\"a\"", "\"x\"");
        let got = DotGenerator::new().generate_dot(&g);
        let b = got.find("\"b\" ->").unwrap();
        let a = got.find("\"a\" ->").unwrap();
        assert!(b < a);
        assert!(got.contains("\t}\n\n\t\"a\" -> {"));
    }
}
