/// Where the package index comes from
///
/// Mirrors the `test_repository_mode` flag of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSourceMode {
    /// `repository_url` is a local file holding the index text
    Test,
    /// `repository_url` points to a (usually gzip-compressed) remote index
    Live,
}

impl IndexSourceMode {
    pub fn from_test_flag(test_repository_mode: bool) -> Self {
        if test_repository_mode {
            IndexSourceMode::Test
        } else {
            IndexSourceMode::Live
        }
    }
}

impl std::fmt::Display for IndexSourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexSourceMode::Test => write!(f, "test repository"),
            IndexSourceMode::Live => write!(f, "live repository"),
        }
    }
}
