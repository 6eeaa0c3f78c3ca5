//! deb-depgraph - Dependency graph explorer for Debian-style package repositories
//!
//! This library reads a `Packages` index (local file or remote, optionally
//! gzip-compressed) and answers three questions about one package: what it
//! depends on directly, everything it pulls in transitively, and which
//! packages depend on it.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_resolution`): Index parsing, lookup and graph algorithms
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Configuration** (`config`): The JSON configuration file
//!
//! # Example
//!
//! ```no_run
//! use deb_depgraph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let index_source = LocalIndexReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ResolveDependenciesUseCase::new(index_source, progress_reporter);
//!
//! // Execute
//! let request = ResolutionRequest::new(
//!     "curl",
//!     "8.5.0-2ubuntu10",
//!     "Packages",
//!     IndexSourceMode::Test,
//!     "",
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = AsciiTreeFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, LocalIndexReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        AsciiTreeFormatter, DotFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::HttpIndexClient;
    pub use crate::application::dto::{IndexSourceMode, ResolutionRequest, ResolutionResponse};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::config::{load_config_from_path, Config};
    pub use crate::dependency_resolution::domain::{
        DependencyGraph, PackageRecord, ParsedIndex, ReportMetadata, ReverseIndex,
    };
    pub use crate::dependency_resolution::services::{
        ExclusionFilter, GraphBuilder, IndexParser, PackageLookup, ReverseIndexBuilder,
        VersionMatch,
    };
    pub use crate::ports::outbound::{IndexSource, OutputPresenter, ProgressReporter, ReportFormatter};
    pub use crate::shared::error::{DepGraphError, ExitCode};
    pub use crate::shared::Result;
}
