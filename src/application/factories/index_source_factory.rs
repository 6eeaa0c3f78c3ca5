use crate::adapters::outbound::filesystem::LocalIndexReader;
use crate::adapters::outbound::network::HttpIndexClient;
use crate::application::dto::IndexSourceMode;
use crate::ports::outbound::IndexSource;
use crate::shared::Result;

/// Factory selecting the index source for a repository mode
pub struct IndexSourceFactory;

impl IndexSourceFactory {
    /// Creates the index source matching `mode`
    ///
    /// # Errors
    /// Fails only when the HTTP client cannot be constructed (live mode).
    pub fn create(mode: IndexSourceMode) -> Result<Box<dyn IndexSource>> {
        Ok(match mode {
            IndexSourceMode::Test => Box::new(LocalIndexReader::new()),
            IndexSourceMode::Live => Box::new(HttpIndexClient::new()?),
        })
    }
}
