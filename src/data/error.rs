use thiserror::Error;

/// Errors produced by the filtering and statistics APIs.
///
/// Loader failures stay `anyhow::Error` (they carry file/row context and are
/// fatal at startup); these variants cover the recoverable query errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("invalid age range: {min}..={max}")]
    InvalidRange { min: u32, max: u32 },
}
