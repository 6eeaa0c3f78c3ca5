/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the package repository, the console and the output files.
pub mod index_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use index_source::IndexSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
