/// PackageRecord value object - one paragraph of a package index
///
/// `dependencies` holds bare package names in the order they first appear in
/// the `Depends` field, without duplicates and without version constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: String,
    version: Option<String>,
    dependencies: Vec<String>,
}

impl PackageRecord {
    pub fn new(name: String, version: Option<String>, dependencies: Vec<String>) -> Self {
        Self {
            name,
            version,
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// True when this record carries exactly the requested version
    pub fn has_version(&self, version: &str) -> bool {
        self.version.as_deref() == Some(version)
    }
}

/// Result of parsing a whole index
///
/// Blocks without a package name are not records; they are only counted so
/// callers can warn about them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedIndex {
    records: Vec<PackageRecord>,
    malformed_blocks: usize,
}

impl ParsedIndex {
    pub fn new(records: Vec<PackageRecord>, malformed_blocks: usize) -> Self {
        Self {
            records,
            malformed_blocks,
        }
    }

    pub fn records(&self) -> &[PackageRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PackageRecord> {
        self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn malformed_block_count(&self) -> usize {
        self.malformed_blocks
    }
}
