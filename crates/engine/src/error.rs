//! The module contains the errors the engine can return.
//!
//! Input errors ([`InvalidDescription`], [`InvalidAmount`], [`ZeroAmount`]) are
//! produced by validation and leave the ledger untouched. Storage errors
//! ([`Io`], [`Json`], [`Storage`]) come from a [`LedgerStore`] and are
//! recovered by the ledger itself.
//!
//!  [`InvalidDescription`]: EngineError::InvalidDescription
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`ZeroAmount`]: EngineError::ZeroAmount
//!  [`Io`]: EngineError::Io
//!  [`Json`]: EngineError::Json
//!  [`Storage`]: EngineError::Storage
//!  [`LedgerStore`]: crate::LedgerStore
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid description: {0}")]
    InvalidDescription(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount must not be zero")]
    ZeroAmount,
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidDescription(a), Self::InvalidDescription(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::ZeroAmount, Self::ZeroAmount) => true,
            (Self::UnsupportedCurrency(a), Self::UnsupportedCurrency(b)) => a == b,
            (Self::UnsupportedLocale(a), Self::UnsupportedLocale(b)) => a == b,
            (Self::Storage(a), Self::Storage(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind() && a.to_string() == b.to_string(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
