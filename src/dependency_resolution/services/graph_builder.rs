use super::{ExclusionFilter, PackageLookup, VersionMatch};
use crate::dependency_resolution::domain::{DependencyGraph, PackageRecord};
use crate::shared::Result;
use std::collections::{HashSet, VecDeque};

/// GraphBuilder service: breadth-first transitive dependency graph
///
/// The root is looked up with its exact version; every package reached from
/// it is looked up by name only, because indexes rarely pin the versions of
/// indirect dependencies.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the dependency graph reachable from `root`
    ///
    /// # Arguments
    /// * `records` - Parsed index records
    /// * `root` - Package the traversal starts from
    /// * `version` - Version the root must have
    /// * `filter` - Names matching the filter become leaves and are dropped
    ///   from the dependency lists of other packages
    ///
    /// # Errors
    /// Any lookup failure aborts the traversal; no partial graph is returned.
    pub fn build(
        records: &[PackageRecord],
        root: &str,
        version: &str,
        filter: &ExclusionFilter,
    ) -> Result<DependencyGraph> {
        let mut queue = VecDeque::from([root.to_string()]);
        let mut visited: HashSet<String> = HashSet::new();
        let mut graph = DependencyGraph::new();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }

            if filter.matches(&current) {
                graph.insert(current, Vec::new());
                continue;
            }

            let mode = if current == root {
                VersionMatch::Exact
            } else {
                VersionMatch::AnyVersion
            };
            let dependencies = PackageLookup::direct_dependencies(records, &current, version, mode)?;

            let mut kept = Vec::with_capacity(dependencies.len());
            for dependency in dependencies {
                if filter.matches(&dependency) {
                    continue;
                }
                if !visited.contains(&dependency) {
                    queue.push_back(dependency.clone());
                }
                kept.push(dependency);
            }

            graph.insert(current, kept);
        }

        Ok(graph)
    }
}
