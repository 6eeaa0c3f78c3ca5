use crate::shared::error::DepGraphError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum length of the exclusion substring
const MAX_FILTER_LENGTH: usize = 255;

/// ExclusionFilter - substring filter applied to package names
///
/// An empty substring produces an inactive filter that matches nothing.
/// The filter remembers whether it ever matched so callers can warn about a
/// filter that had no effect.
#[derive(Debug, Default)]
pub struct ExclusionFilter {
    substring: String,
    matched: Cell<bool>,
}

impl ExclusionFilter {
    /// Creates a new filter from the configured substring
    ///
    /// # Errors
    /// Fails when the substring is longer than 255 bytes.
    pub fn new(substring: impl Into<String>) -> Result<Self> {
        let substring = substring.into();
        if substring.len() > MAX_FILTER_LENGTH {
            return Err(DepGraphError::InvalidConfig {
                field: "filter_substring".to_string(),
                reason: format!(
                    "filter is too long ({} bytes). Maximum: {} bytes",
                    substring.len(),
                    MAX_FILTER_LENGTH
                ),
            }
            .into());
        }

        Ok(Self {
            substring,
            matched: Cell::new(false),
        })
    }

    /// A filter that excludes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// True when `package_name` contains the substring
    pub fn matches(&self, package_name: &str) -> bool {
        if self.substring.is_empty() {
            return false;
        }
        let is_match = package_name.contains(&self.substring);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    pub fn is_active(&self) -> bool {
        !self.substring.is_empty()
    }

    pub fn substring(&self) -> &str {
        &self.substring
    }

    /// Whether any call to [`matches`](Self::matches) returned true so far
    pub fn has_matched(&self) -> bool {
        self.matched.get()
    }
}
