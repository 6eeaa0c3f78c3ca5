pub mod dependency_graph;
pub mod package_record;
pub mod report_metadata;
pub mod reverse_index;

pub use dependency_graph::DependencyGraph;
pub use package_record::{PackageRecord, ParsedIndex};
pub use report_metadata::ReportMetadata;
pub use reverse_index::ReverseIndex;
