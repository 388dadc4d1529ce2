// error.rs - Grid engine error types

use thiserror::Error;

/// Errors returned when building or re-initializing a [`Grid`](crate::Grid).
///
/// Everything else in the engine treats bad coordinates as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was zero.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },
}
