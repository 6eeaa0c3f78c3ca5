use crate::adapters::outbound::archive::decode_index;
use crate::ports::outbound::IndexSource;
use crate::shared::error::DepGraphError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// LocalIndexReader adapter for test repository mode
///
/// Reads the index from a local file. The file may hold plain index text or
/// a gzip-compressed `Packages.gz` copied from a mirror.
pub struct LocalIndexReader;

impl LocalIndexReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads the file with the usual checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<Vec<u8>> {
        validate_regular_file(path, "package index")?;
        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read package index: {}", e))
    }
}

impl Default for LocalIndexReader {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for LocalIndexReader {
    fn fetch_index(&self, location: &str) -> Result<String> {
        let path = Path::new(location);

        if !path.exists() {
            return Err(DepGraphError::IndexReadError {
                location: location.to_string(),
                details: "File does not exist".to_string(),
            }
            .into());
        }

        let bytes = self.safe_read_file(path).map_err(|e| {
            // Security violations keep their own type and hint
            match e.downcast::<DepGraphError>() {
                Ok(typed) => anyhow::Error::from(typed),
                Err(other) => DepGraphError::IndexReadError {
                    location: location.to_string(),
                    details: other.to_string(),
                }
                .into(),
            }
        })?;

        decode_index(bytes, location)
    }
}
