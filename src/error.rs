use crate::domain::method::PaymentMethod;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Validation failed on {field}: {reason}")]
    ValidationFailed { field: &'static str, reason: String },
    #[error("Unsupported payment method: {0}")]
    UnsupportedMethod(PaymentMethod),
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("Strategy already registered for {0}")]
    DuplicateRegistration(PaymentMethod),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PaymentError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
