/// Formatter adapters for the different report outputs
mod ascii_tree_formatter;
mod dot_formatter;
mod text_formatter;

pub use ascii_tree_formatter::AsciiTreeFormatter;
pub use dot_formatter::DotFormatter;
pub use text_formatter::TextFormatter;
