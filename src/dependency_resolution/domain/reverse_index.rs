use std::collections::HashMap;

/// ReverseIndex: forward dependencies of every package in an index
///
/// Built once for the whole index and queried for "who depends on X". A name
/// that appears in several paragraphs keeps its first position and the
/// dependencies of its last paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseIndex {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl ReverseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, dependencies: Vec<String>) {
        if let Some(&idx) = self.positions.get(&name) {
            self.entries[idx].1 = dependencies;
            return;
        }
        self.positions.insert(name.clone(), self.entries.len());
        self.entries.push((name, dependencies));
    }

    /// Forward dependencies of `name`; `None` means the index had no record for it
    pub fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.positions
            .get(name)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
