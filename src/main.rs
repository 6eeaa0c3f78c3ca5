mod cli;

use cli::Args;
use deb_depgraph::adapters::outbound::console::StderrProgressReporter;
use deb_depgraph::application::dto::{ResolutionRequest, ResolutionResponse};
use deb_depgraph::application::factories::{
    FormatterFactory, FormatterType, IndexSourceFactory, PresenterFactory, PresenterType,
};
use deb_depgraph::application::use_cases::ResolveDependenciesUseCase;
use deb_depgraph::config::load_config_from_path;
use deb_depgraph::ports::outbound::ProgressReporter;
use deb_depgraph::shared::error::ExitCode;
use deb_depgraph::shared::Result;
use owo_colors::{OwoColorize, Stream};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!(
            "\n{}\n",
            "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
        );
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let config = load_config_from_path(&args.config)?;
    if args.show_config {
        print!("{}", config.display());
    }

    // Create adapters (Dependency Injection)
    let request = ResolutionRequest::from(&config);
    let index_source = IndexSourceFactory::create(request.source_mode)?;
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Execute use case
    let use_case = ResolveDependenciesUseCase::new(index_source, &progress_reporter);
    let response = use_case.execute(request)?;

    // Reports on stdout
    render(&response, FormatterType::Text, PresenterType::Stdout, &progress_reporter)?;
    if config.ascii_tree_output {
        render(
            &response,
            FormatterType::AsciiTree,
            PresenterType::Stdout,
            &progress_reporter,
        )?;
    }

    // Graph file
    render(
        &response,
        FormatterType::Dot,
        PresenterType::output_file(&config.output_filename),
        &progress_reporter,
    )?;

    Ok(())
}

fn render(
    response: &ResolutionResponse,
    formatter_type: FormatterType,
    presenter_type: PresenterType,
    progress_reporter: &StderrProgressReporter,
) -> Result<()> {
    progress_reporter.report(FormatterFactory::progress_message(formatter_type));

    let formatter = FormatterFactory::create(formatter_type);
    let output = formatter.format(response)?;

    PresenterFactory::create(presenter_type).present(&output)
}
