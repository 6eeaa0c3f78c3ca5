use crate::application::dto::ResolutionResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Placeholder printed for empty lists
const NONE: &str = "(none)";

/// TextFormatter adapter for the plain-text dependency report
///
/// Sections: header, direct dependencies, dependency graph (one
/// `name -> deps` line per package in BFS order), reverse dependencies.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_header(output: &mut String, response: &ResolutionResponse) {
        let metadata = &response.metadata;
        output.push_str(&format!(
            "=== {} {} ===\n",
            metadata.tool_name(),
            metadata.tool_version()
        ));
        output.push_str(&format!("Generated: {}\n", metadata.timestamp()));
        output.push_str(&format!(
            "Package: {} {}\n",
            response.package_name, response.version
        ));
        let filter = if response.filter_substring.is_empty() {
            NONE
        } else {
            response.filter_substring.as_str()
        };
        output.push_str(&format!("Exclusion filter: {}\n", filter));
    }

    fn render_list(output: &mut String, title: &str, names: &[String]) {
        output.push_str(&format!("\n{} ({}):\n", title, names.len()));
        if names.is_empty() {
            output.push_str(&format!("  {}\n", NONE));
        }
        for name in names {
            output.push_str(&format!("  {}\n", name));
        }
    }

    fn render_graph(output: &mut String, response: &ResolutionResponse) {
        let graph = &response.dependency_graph;
        output.push_str(&format!(
            "\nDependency graph ({} packages, {} edges):\n",
            graph.package_count(),
            graph.edge_count()
        ));
        for (name, dependencies) in graph.iter() {
            let rendered = if dependencies.is_empty() {
                NONE.to_string()
            } else {
                dependencies.join(", ")
            };
            output.push_str(&format!("  {} -> {}\n", name, rendered));
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &ResolutionResponse) -> Result<String> {
        let mut output = String::new();

        Self::render_header(&mut output, response);
        Self::render_list(
            &mut output,
            &format!(
                "Direct dependencies of {} {}",
                response.package_name, response.version
            ),
            &response.direct_dependencies,
        );
        Self::render_graph(&mut output, response);
        Self::render_list(
            &mut output,
            &format!("Reverse dependencies of {}", response.package_name),
            &response.reverse_dependencies,
        );

        Ok(output)
    }
}
