use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so reports printed on stdout can be piped. Warnings are
/// highlighted when stderr is a color-capable terminal.
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// A reporter that only prints warnings
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.if_supports_color(Stream::Stderr, |text| text.green()));
        }
    }
}
