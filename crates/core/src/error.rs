//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing entries). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not present in the inventory.
    #[error("item not in inventory: {0}")]
    MissingItem(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_item(name: impl Into<String>) -> Self {
        Self::MissingItem(name.into())
    }
}
