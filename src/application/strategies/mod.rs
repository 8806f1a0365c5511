//! One `PaymentMethodStrategy` per payment method.
//!
//! Every backend call made here runs under a deadline; an elapsed deadline
//! surfaces as `PaymentError::BackendUnavailable`.

pub mod bank_transfer;
pub mod card;
pub mod wallet;

pub use bank_transfer::BankTransferStrategy;
pub use card::CardPaymentStrategy;
pub use wallet::WalletPaymentStrategy;

use crate::domain::method::PaymentMethod;
use crate::error::{PaymentError, Result};
use std::future::Future;
use std::time::Duration;

pub(crate) async fn with_deadline<T, F>(deadline: Duration, backend: &str, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(backend, ?deadline, "backend call timed out");
            Err(PaymentError::BackendUnavailable(format!(
                "{} did not answer within {:?}",
                backend, deadline
            )))
        }
    }
}

pub(crate) fn payload_mismatch(expected: PaymentMethod, actual: PaymentMethod) -> PaymentError {
    PaymentError::validation(
        "details",
        format!("expected {} details, got {}", expected, actual),
    )
}

pub(crate) fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| PaymentError::validation(field, "required"))
}
