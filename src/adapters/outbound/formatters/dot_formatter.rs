use crate::application::dto::ResolutionResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// DotFormatter adapter for Graphviz output
///
/// Every package is declared as a node (so packages without edges still
/// show up), followed by one edge per dependency, both in BFS order.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a package name as a DOT identifier
    fn quote(name: &str) -> String {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for DotFormatter {
    fn format(&self, response: &ResolutionResponse) -> Result<String> {
        let graph = &response.dependency_graph;
        let mut output = String::from("digraph dependencies {\n");
        output.push_str("    rankdir=LR;\n");
        output.push_str("    node [shape=box];\n");

        for name in graph.package_names() {
            if Some(name) == graph.root() {
                output.push_str(&format!("    {} [style=bold];\n", Self::quote(name)));
            } else {
                output.push_str(&format!("    {};\n", Self::quote(name)));
            }
        }

        for (name, dependencies) in graph.iter() {
            for dependency in dependencies {
                output.push_str(&format!(
                    "    {} -> {};\n",
                    Self::quote(name),
                    Self::quote(dependency)
                ));
            }
        }

        output.push_str("}\n");
        Ok(output)
    }
}
