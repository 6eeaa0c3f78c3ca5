use crate::dependency_resolution::domain::ReportMetadata;
use chrono::Utc;

/// MetadataGenerator service for report metadata
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata stamped with the current UTC time
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Generates metadata for this tool, using the version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = MetadataGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = MetadataGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_name(), "deb-depgraph");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }
}
