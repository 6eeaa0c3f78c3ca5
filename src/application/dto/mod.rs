/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI/config layer, the use case and the
/// formatters, keeping the domain layer isolated.
mod index_source_mode;
mod resolution_request;
mod resolution_response;

pub use index_source_mode::IndexSourceMode;
pub use resolution_request::ResolutionRequest;
pub use resolution_response::ResolutionResponse;
