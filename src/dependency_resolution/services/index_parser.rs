use crate::dependency_resolution::domain::{PackageRecord, ParsedIndex};
use std::collections::HashSet;

const PACKAGE_FIELD: &str = "Package:";
const VERSION_FIELD: &str = "Version:";
const DEPENDS_FIELD: &str = "Depends:";

/// IndexParser service for the Debian `Packages` text format
///
/// The index is a sequence of paragraphs separated by blank lines. Inside a
/// paragraph only the `Package:`, `Version:` and `Depends:` lines are read;
/// everything else is ignored. When a field repeats within a paragraph the
/// last occurrence wins.
pub struct IndexParser;

impl IndexParser {
    /// Parses raw index text into package records
    ///
    /// Paragraphs without a package name are skipped and counted in
    /// [`ParsedIndex::malformed_block_count`]; they never fail the parse.
    pub fn parse(text: &str) -> ParsedIndex {
        let mut records = Vec::new();
        let mut malformed_blocks = 0;

        for block in Self::split_blocks(text) {
            match Self::parse_block(&block) {
                Some(record) => records.push(record),
                None => malformed_blocks += 1,
            }
        }

        ParsedIndex::new(records, malformed_blocks)
    }

    /// Groups lines into paragraphs; whitespace-only lines separate paragraphs
    fn split_blocks(text: &str) -> Vec<Vec<&str>> {
        let mut blocks = Vec::new();
        let mut current = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            blocks.push(current);
        }

        blocks
    }

    fn parse_block(lines: &[&str]) -> Option<PackageRecord> {
        let mut name = None;
        let mut version = None;
        let mut dependencies = Vec::new();

        for line in lines {
            if line.starts_with(PACKAGE_FIELD) {
                name = Some(Self::field_value(line));
            } else if line.starts_with(VERSION_FIELD) {
                version = Some(Self::field_value(line));
            } else if line.starts_with(DEPENDS_FIELD) {
                dependencies = Self::parse_depends(Self::field_value(line));
            }
        }

        let name = name.filter(|n| !n.is_empty())?;
        Some(PackageRecord::new(
            name.to_string(),
            version.map(str::to_string),
            dependencies,
        ))
    }

    /// Text after the first colon, trimmed
    fn field_value(line: &str) -> &str {
        line.split_once(':').map(|(_, value)| value.trim()).unwrap_or("")
    }

    /// Extracts dependency names from a `Depends` value
    ///
    /// `libc6 (>= 2.34), zlib1g | libz, libc6` yields `[libc6, zlib1g]`:
    /// each entry keeps only the token before its first space and repeated
    /// names are dropped.
    pub fn parse_depends(value: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for entry in value.split(',') {
            let name = match entry.split_whitespace().next() {
                Some(name) => name,
                None => continue,
            };
            if seen.insert(name) {
                names.push(name.to_string());
            }
        }

        names
    }
}
