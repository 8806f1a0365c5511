use super::method::PaymentMethod;
use super::request::PaymentRequest;
use super::result::{CancelResult, PaymentResult, TransactionId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Capability set implemented once per payment method.
///
/// `pay` is only sanctioned after `validate` succeeded; the dispatch service
/// enforces that ordering, strategies do not re-check it.
#[async_trait]
pub trait PaymentMethodStrategy: Send + Sync {
    /// Inspects the method-specific fields only. Never calls a backend.
    fn validate(&self, request: &PaymentRequest) -> Result<()>;

    /// Calls the backend and maps its response into a `PaymentResult`.
    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResult>;

    /// Forwards to the backend cancellation endpoint. The id is not checked
    /// locally.
    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult>;

    /// The method this strategy serves; the registry keys on it.
    fn method(&self) -> PaymentMethod;
}

pub type StrategyRef = Arc<dyn PaymentMethodStrategy>;
