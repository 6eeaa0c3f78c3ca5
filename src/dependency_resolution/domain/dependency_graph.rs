use std::collections::HashMap;

/// DependencyGraph aggregate: package name -> recorded dependency names
///
/// Keys keep the order in which they were inserted, which for graphs built by
/// [`GraphBuilder`](crate::dependency_resolution::services::GraphBuilder) is
/// the breadth-first visiting order. The first key is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the dependency list of `name`.
    ///
    /// Re-inserting an existing key replaces its list but keeps its position.
    pub fn insert(&mut self, name: String, dependencies: Vec<String>) {
        match self.positions.get(&name) {
            Some(&idx) => self.entries[idx].1 = dependencies,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, dependencies));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.positions
            .get(name)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// The first package recorded in the graph
    pub fn root(&self) -> Option<&str> {
        self.entries.first().map(|(name, _)| name.as_str())
    }

    /// Iterates `(package, dependencies)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn package_count(&self) -> usize {
        self.entries.len()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, deps)| deps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dependency_graph_preserves_insertion_order() {
        let mut graph = DependencyGraph::new();
        graph.insert("zlib".to_string(), vec![]);
        graph.insert("curl".to_string(), names(&["zlib"]));
        graph.insert("apt".to_string(), names(&["curl"]));

        let keys: Vec<&str> = graph.package_names().collect();
        assert_eq!(keys, vec!["zlib", "curl", "apt"]);
        assert_eq!(graph.root(), Some("zlib"));
    }

    #[test]
    fn test_dependency_graph_reinsert_keeps_position() {
        let mut graph = DependencyGraph::new();
        graph.insert("A".to_string(), names(&["B"]));
        graph.insert("B".to_string(), vec![]);
        graph.insert("A".to_string(), names(&["C"]));

        let keys: Vec<&str> = graph.package_names().collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(graph.get("A"), Some(&names(&["C"])[..]));
        assert_eq!(graph.package_count(), 2);
    }

    #[test]
    fn test_dependency_graph_counts() {
        let mut graph = DependencyGraph::new();
        graph.insert("A".to_string(), names(&["B", "C"]));
        graph.insert("B".to_string(), vec![]);
        graph.insert("C".to_string(), names(&["B"]));

        assert_eq!(graph.package_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains("C"));
        assert!(!graph.contains("D"));
        assert!(graph.get("D").is_none());
    }

    #[test]
    fn test_dependency_graph_empty() {
        let graph = DependencyGraph::new();

        assert!(graph.is_empty());
        assert_eq!(graph.root(), None);
        assert_eq!(graph.edge_count(), 0);
    }
}
