/// Dependency resolution domain - pure logic over parsed package indexes
///
/// Nothing in here performs I/O or reports progress; it receives index text
/// and returns values.
pub mod domain;
pub mod services;
