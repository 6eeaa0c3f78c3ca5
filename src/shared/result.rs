/// Crate-wide Result alias.
///
/// Errors travel as `anyhow::Error`; typed failures such as
/// [`DepGraphError`](crate::shared::error::DepGraphError) are wrapped with
/// `.into()` and recovered with `downcast_ref` where the caller cares.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
