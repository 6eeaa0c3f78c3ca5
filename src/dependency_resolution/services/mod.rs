mod exclusion_filter;
mod graph_builder;
mod index_parser;
mod metadata_generator;
mod package_lookup;
mod reverse_index_builder;

pub use exclusion_filter::ExclusionFilter;
pub use graph_builder::GraphBuilder;
pub use index_parser::IndexParser;
pub use metadata_generator::MetadataGenerator;
pub use package_lookup::{PackageLookup, VersionMatch};
pub use reverse_index_builder::ReverseIndexBuilder;
