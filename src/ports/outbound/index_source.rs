use crate::shared::Result;

/// IndexSource port for obtaining the raw text of a package index
///
/// Implementations hide where the index lives: a local file in test
/// repository mode, or a compressed archive on a remote mirror in live mode.
/// Either way the caller receives decoded UTF-8 text.
pub trait IndexSource {
    /// Retrieves and decodes the index at `location`
    ///
    /// # Arguments
    /// * `location` - A filesystem path or a URL, depending on the implementation
    ///
    /// # Errors
    /// Returns an error if the index cannot be read, downloaded or decompressed
    fn fetch_index(&self, location: &str) -> Result<String>;
}

impl<T: IndexSource + ?Sized> IndexSource for Box<T> {
    fn fetch_index(&self, location: &str) -> Result<String> {
        (**self).fetch_index(location)
    }
}
