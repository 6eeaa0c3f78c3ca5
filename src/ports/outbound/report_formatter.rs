use crate::application::dto::ResolutionResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering resolution results
///
/// Implemented by the plain-text summary, the ASCII tree and the Graphviz
/// DOT renderers.
pub trait ReportFormatter {
    /// Renders the response into its textual form
    ///
    /// # Errors
    /// Returns an error if the response cannot be rendered
    fn format(&self, response: &ResolutionResponse) -> Result<String>;
}
