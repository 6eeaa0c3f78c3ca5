/// ReportMetadata value object attached to every resolution report
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
