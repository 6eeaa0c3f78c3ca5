use crate::dependency_resolution::domain::{DependencyGraph, ReportMetadata};

/// ResolutionResponse - Results of one resolution run
///
/// Holds everything the formatters need; nothing here is recomputed later.
#[derive(Debug, Clone)]
pub struct ResolutionResponse {
    /// Root package the run started from
    pub package_name: String,
    /// Version of the root package
    pub version: String,
    /// Filter that was applied (empty when none)
    pub filter_substring: String,
    /// Names listed in the root's own `Depends` field
    pub direct_dependencies: Vec<String>,
    /// Breadth-first graph reachable from the root
    pub dependency_graph: DependencyGraph,
    /// Packages whose `Depends` field names the root
    pub reverse_dependencies: Vec<String>,
    /// Generation timestamp and tool information
    pub metadata: ReportMetadata,
}
