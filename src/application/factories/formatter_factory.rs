use crate::adapters::outbound::formatters::{AsciiTreeFormatter, DotFormatter, TextFormatter};
use crate::ports::outbound::ReportFormatter;

/// Report renderings supported by the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    /// Summary of direct, transitive and reverse dependencies
    Text,
    /// Dependency tree drawn with box characters
    AsciiTree,
    /// Graphviz DOT source of the dependency graph
    Dot,
}

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// so callers only pick a [`FormatterType`].
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use deb_depgraph::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter = FormatterFactory::create(FormatterType::Dot);
    /// ```
    pub fn create(formatter_type: FormatterType) -> Box<dyn ReportFormatter> {
        match formatter_type {
            FormatterType::Text => Box::new(TextFormatter::new()),
            FormatterType::AsciiTree => Box::new(AsciiTreeFormatter::new()),
            FormatterType::Dot => Box::new(DotFormatter::new()),
        }
    }

    /// Returns the progress message for the specified type
    ///
    /// # Examples
    /// ```
    /// use deb_depgraph::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let message = FormatterFactory::progress_message(FormatterType::Dot);
    /// assert_eq!(message, "📝 Generating Graphviz DOT graph...");
    /// ```
    pub fn progress_message(formatter_type: FormatterType) -> &'static str {
        match formatter_type {
            FormatterType::Text => "📝 Generating dependency report...",
            FormatterType::AsciiTree => "🌳 Generating ASCII dependency tree...",
            FormatterType::Dot => "📝 Generating Graphviz DOT graph...",
        }
    }
}
