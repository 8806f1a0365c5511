use super::registry::StrategyRegistry;
use crate::domain::method::PaymentMethod;
use crate::domain::request::PaymentRequest;
use crate::domain::result::{CancelResult, PaymentResult, TransactionId};
use crate::error::Result;
use std::sync::Arc;
use tracing::Instrument;

/// The main entry point for payment processing.
///
/// `PaymentDispatchService` resolves the strategy for a payment method and
/// sequences validate then pay, or cancel. It holds nothing but a shared,
/// already populated registry, so it can be cloned into concurrent tasks.
/// Failures surface exactly as the strategy or backend raised them: there is
/// no retry and no compensation.
#[derive(Clone)]
pub struct PaymentDispatchService {
    registry: Arc<StrategyRegistry>,
}

impl PaymentDispatchService {
    /// Creates a new `PaymentDispatchService`.
    ///
    /// # Arguments
    ///
    /// * `registry` - The populated strategy registry. It is read-only from here on.
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Validates `request` with the strategy for `method` and, if it passes,
    /// executes the payment.
    ///
    /// A backend-reported business failure comes back as `Ok` with a
    /// non-success status.
    pub async fn process_payment(
        &self,
        method: PaymentMethod,
        request: &PaymentRequest,
    ) -> Result<PaymentResult> {
        let span = tracing::info_span!(
            "process_payment",
            %method,
            order_id = %request.order_id()
        );
        async move {
            tracing::debug!(amount = %request.amount(), "dispatching payment");
            let strategy = self.registry.get_strategy(method).inspect_err(|e| {
                tracing::warn!(error = %e, "no strategy for payment method");
            })?;

            strategy.validate(request).inspect_err(|e| {
                tracing::warn!(error = %e, "payment request rejected");
            })?;

            let result = strategy.pay(request).await?;
            tracing::info!(
                transaction_id = %result.transaction_id(),
                status = %result.status(),
                "payment processed"
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }

    /// Cancels a previous payment. No validation step runs.
    pub async fn cancel_payment(
        &self,
        method: PaymentMethod,
        transaction_id: &TransactionId,
    ) -> Result<CancelResult> {
        let span = tracing::info_span!("cancel_payment", %method, %transaction_id);
        async move {
            let strategy = self.registry.get_strategy(method).inspect_err(|e| {
                tracing::warn!(error = %e, "no strategy for payment method");
            })?;

            let result = strategy.cancel(transaction_id).await?;
            tracing::info!(success = result.is_success(), "cancellation processed");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
