// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("dependency unavailable: {0}")]
    Unavailable(String),
    #[error("no free slug for `{base}` after {attempts} attempts")]
    SlugSpaceExhausted { base: String, attempts: u32 },
}
