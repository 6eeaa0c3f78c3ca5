use crate::application::dto::{ResolutionRequest, ResolutionResponse};
use crate::dependency_resolution::domain::{DependencyGraph, ParsedIndex};
use crate::dependency_resolution::services::{
    ExclusionFilter, GraphBuilder, IndexParser, MetadataGenerator, PackageLookup,
    ReverseIndexBuilder, VersionMatch,
};
use crate::ports::outbound::{IndexSource, ProgressReporter};
use crate::shared::Result;

/// ResolveDependenciesUseCase - Core use case of the tool
///
/// Fetches the index through the injected source, then computes the direct
/// dependencies, the transitive graph and the reverse dependencies of the
/// requested package.
///
/// # Type Parameters
/// * `IS` - IndexSource implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<IS, PR> {
    index_source: IS,
    progress_reporter: PR,
}

impl<IS, PR> ResolveDependenciesUseCase<IS, PR>
where
    IS: IndexSource,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(index_source: IS, progress_reporter: PR) -> Self {
        Self {
            index_source,
            progress_reporter,
        }
    }

    /// Executes the resolution
    ///
    /// # Errors
    /// Fails when the index cannot be obtained, when the filter is invalid,
    /// or with `DepGraphError::PackageNotFound` when the root (exact version)
    /// or any package reached from it is missing from the index.
    pub fn execute(&self, request: ResolutionRequest) -> Result<ResolutionResponse> {
        // Step 1: Obtain and parse the index
        let parsed = self.load_index(&request)?;
        let filter = ExclusionFilter::new(request.filter_substring.as_str())?;

        // Step 2: Direct dependencies of the root, exact version
        let direct_dependencies = PackageLookup::direct_dependencies(
            parsed.records(),
            &request.package_name,
            &request.version,
            VersionMatch::Exact,
        )?;
        self.progress_reporter.report(&format!(
            "📦 {} {}: {} direct dependenc{}",
            request.package_name,
            request.version,
            direct_dependencies.len(),
            if direct_dependencies.len() == 1 { "y" } else { "ies" }
        ));

        // Step 3: Transitive graph
        let dependency_graph = self.build_graph(&parsed, &request, &filter)?;

        // Step 4: Reverse dependencies
        let reverse_dependencies = self.find_reverse_dependencies(&parsed, &request, &filter);

        if filter.is_active() && !filter.has_matched() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Filter '{}' did not match any package.",
                filter.substring()
            ));
        }

        self.progress_reporter
            .report_completion("✅ Dependency resolution complete");

        Ok(ResolutionResponse {
            package_name: request.package_name,
            version: request.version,
            filter_substring: request.filter_substring,
            direct_dependencies,
            dependency_graph,
            reverse_dependencies,
            metadata: MetadataGenerator::generate_default_metadata(),
        })
    }

    /// Reads the index through the source and parses it, reporting progress
    fn load_index(&self, request: &ResolutionRequest) -> Result<ParsedIndex> {
        self.progress_reporter.report(&format!(
            "📖 Loading package index ({}) from: {}",
            request.source_mode, request.repository_location
        ));

        let text = self
            .index_source
            .fetch_index(&request.repository_location)?;
        let parsed = IndexParser::parse(&text);

        self.progress_reporter
            .report(&format!("✅ Parsed {} package record(s)", parsed.record_count()));

        if parsed.malformed_block_count() > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped {} paragraph(s) without a Package field",
                parsed.malformed_block_count()
            ));
        }

        Ok(parsed)
    }

    fn build_graph(
        &self,
        parsed: &ParsedIndex,
        request: &ResolutionRequest,
        filter: &ExclusionFilter,
    ) -> Result<DependencyGraph> {
        self.progress_reporter
            .report("📊 Building transitive dependency graph...");

        let graph = GraphBuilder::build(
            parsed.records(),
            &request.package_name,
            &request.version,
            filter,
        )?;

        self.progress_reporter.report(&format!(
            "   - Packages in graph: {}",
            graph.package_count()
        ));
        self.progress_reporter
            .report(&format!("   - Dependency edges: {}", graph.edge_count()));

        Ok(graph)
    }

    fn find_reverse_dependencies(
        &self,
        parsed: &ParsedIndex,
        request: &ResolutionRequest,
        filter: &ExclusionFilter,
    ) -> Vec<String> {
        self.progress_reporter
            .report("🔁 Searching for reverse dependencies...");

        let reverse_index = ReverseIndexBuilder::from_records(parsed.records());
        let dependents =
            ReverseIndexBuilder::reverse_dependents(&reverse_index, &request.package_name, filter);

        self.progress_reporter.report(&format!(
            "   - Packages depending on {}: {}",
            request.package_name,
            dependents.len()
        ));

        dependents
    }
}
