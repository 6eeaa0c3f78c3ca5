use super::IndexSourceMode;
use crate::config::Config;

/// ResolutionRequest - Internal request DTO for the resolution use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Root package to analyze
    pub package_name: String,
    /// Exact version the root package must have in the index
    pub version: String,
    /// Local path (test mode) or URL (live mode) of the index
    pub repository_location: String,
    /// How `repository_location` is interpreted
    pub source_mode: IndexSourceMode,
    /// Substring excluding packages; empty means no filtering
    pub filter_substring: String,
}

impl ResolutionRequest {
    pub fn new(
        package_name: impl Into<String>,
        version: impl Into<String>,
        repository_location: impl Into<String>,
        source_mode: IndexSourceMode,
        filter_substring: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            version: version.into(),
            repository_location: repository_location.into(),
            source_mode,
            filter_substring: filter_substring.into(),
        }
    }
}

impl From<&Config> for ResolutionRequest {
    fn from(config: &Config) -> Self {
        Self::new(
            config.package_name.clone(),
            config.version.clone(),
            config.repository_url.clone(),
            IndexSourceMode::from_test_flag(config.test_repository_mode),
            config.filter_substring.clone(),
        )
    }
}
