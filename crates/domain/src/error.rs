use thiserror::Error;

/// Domain-layer errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid {field} range: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: String,
        max: String,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
