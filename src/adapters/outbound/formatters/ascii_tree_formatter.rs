use crate::application::dto::ResolutionResponse;
use crate::dependency_resolution::domain::DependencyGraph;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::collections::HashSet;

/// Marker for an edge back to a package on the current path
const CYCLE_MARKER: &str = " (cycle)";

/// Marker for a package whose subtree was already printed
const SEEN_MARKER: &str = " (*)";

/// AsciiTreeFormatter adapter for rendering the graph as a tree
///
/// Walks the graph depth-first from the root. Each package is expanded
/// once; later occurrences are marked with `(*)`, and edges closing a
/// cycle with `(cycle)`.
pub struct AsciiTreeFormatter;

/// Per-render traversal state
struct TreeWalk<'a> {
    graph: &'a DependencyGraph,
    path: Vec<&'a str>,
    expanded: HashSet<&'a str>,
    output: String,
}

impl<'a> TreeWalk<'a> {
    fn new(graph: &'a DependencyGraph) -> Self {
        Self {
            graph,
            path: Vec::new(),
            expanded: HashSet::new(),
            output: String::new(),
        }
    }

    fn render_root(&mut self, root: &'a str) {
        self.output.push_str(root);
        self.output.push('\n');
        self.expand(root, "");
    }

    fn expand(&mut self, name: &'a str, prefix: &str) {
        let graph = self.graph;
        let children = graph.get(name).unwrap_or(&[]);
        self.expanded.insert(name);
        self.path.push(name);

        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };
            let child = child.as_str();

            self.output.push_str(prefix);
            self.output.push_str(connector);
            self.output.push_str(child);

            let has_children = graph.get(child).is_some_and(|deps| !deps.is_empty());
            if self.path.contains(&child) {
                self.output.push_str(CYCLE_MARKER);
                self.output.push('\n');
            } else if self.expanded.contains(child) && has_children {
                self.output.push_str(SEEN_MARKER);
                self.output.push('\n');
            } else {
                self.output.push('\n');
                let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
                self.expand(child, &child_prefix);
            }
        }

        self.path.pop();
    }
}

impl AsciiTreeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AsciiTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for AsciiTreeFormatter {
    fn format(&self, response: &ResolutionResponse) -> Result<String> {
        let graph = &response.dependency_graph;
        let mut output = format!(
            "\nDependency tree of {} {}:\n",
            response.package_name, response.version
        );

        if let Some(root) = graph.root() {
            let mut walk = TreeWalk::new(graph);
            walk.render_root(root);
            output.push_str(&walk.output);
        }

        Ok(output)
    }
}
