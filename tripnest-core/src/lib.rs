pub mod accounts;
pub mod inquiry;
pub mod listing;
pub mod lookup;
pub mod repository;

#[cfg(test)]
pub(crate) mod memory;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Email exists")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0} not found")]
    NotFound(String),
    #[error("Storage failure: {0}")]
    StorageError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Returns the value of a required form field, rejecting absent or blank input.
pub(crate) fn required<'a>(field: &'static str, value: Option<&'a str>) -> CoreResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::MissingField(field)),
    }
}
