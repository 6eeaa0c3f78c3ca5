use super::{ExclusionFilter, IndexParser};
use crate::dependency_resolution::domain::{PackageRecord, ReverseIndex};

/// ReverseIndexBuilder service for "who depends on X" queries
///
/// The index is parsed once for every package regardless of version; queries
/// never fail, an unknown target simply has no dependents.
pub struct ReverseIndexBuilder;

impl ReverseIndexBuilder {
    /// Parses the whole index text into a reverse index
    pub fn build(index_text: &str) -> ReverseIndex {
        Self::from_records(IndexParser::parse(index_text).records())
    }

    /// Builds a reverse index from records that were already parsed
    pub fn from_records(records: &[PackageRecord]) -> ReverseIndex {
        let mut index = ReverseIndex::new();
        for record in records {
            index.insert(record.name().to_string(), record.dependencies().to_vec());
        }
        index
    }

    /// Lists packages that depend directly on `target`, in index order
    ///
    /// Packages whose own name matches `filter` are skipped entirely.
    pub fn reverse_dependents(
        index: &ReverseIndex,
        target: &str,
        filter: &ExclusionFilter,
    ) -> Vec<String> {
        index
            .iter()
            .filter(|(name, _)| !filter.matches(name))
            .filter(|(_, deps)| deps.iter().any(|dep| dep == target))
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
