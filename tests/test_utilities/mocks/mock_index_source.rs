use deb_depgraph::prelude::*;

/// Mock IndexSource serving a fixed index text
#[derive(Clone)]
pub struct MockIndexSource {
    content: String,
    should_fail: bool,
}

impl MockIndexSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl IndexSource for MockIndexSource {
    fn fetch_index(&self, location: &str) -> Result<String> {
        if self.should_fail {
            return Err(DepGraphError::IndexFetchError {
                url: location.to_string(),
                details: "Mock network failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
