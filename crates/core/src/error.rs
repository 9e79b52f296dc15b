//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a construction-time failure: once a drug exists, ticking
/// it is total and cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The drug name was empty (or only whitespace).
    #[error("illegal drug name: cannot be empty")]
    EmptyName,

    /// The starting benefit was negative.
    #[error("illegal drug benefit value {value}: cannot be lower than 0")]
    BenefitBelowMinimum { value: i64 },

    /// The starting benefit exceeded the ceiling.
    #[error("illegal drug benefit value {value}: cannot be greater than {max}")]
    BenefitAboveMaximum { value: i64, max: i64 },

    /// A variant name did not match any rule in the catalog.
    #[error("unknown drug variant: {0}")]
    UnknownVariant(String),

    /// A drug name did not match any catalog entry.
    #[error("unknown drug: {0}")]
    UnknownDrug(String),
}

impl DomainError {
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant(name.into())
    }

    pub fn unknown_drug(name: impl Into<String>) -> Self {
        Self::UnknownDrug(name.into())
    }
}
