/// Crate-wide result type.
///
/// Typed failures are raised as [`MdbomError`](super::MdbomError) and carried
/// inside `anyhow::Error` so adapters can attach context without losing the kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
