use super::{payload_mismatch, required, with_deadline};
use crate::config::DEFAULT_BACKEND_TIMEOUT;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::WalletGatewayBox;
use crate::domain::request::{PaymentDetails, PaymentRequest};
use crate::domain::result::{CancelResult, PaymentResult, PaymentStatus, TransactionId};
use crate::domain::strategy::PaymentMethodStrategy;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

const SUCCESS_STATUS: &str = "SUCCESS";

pub struct WalletPaymentStrategy {
    gateway: WalletGatewayBox,
    timeout: Duration,
}

impl WalletPaymentStrategy {
    pub fn new(gateway: WalletGatewayBox) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_BACKEND_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn user_id<'a>(&self, request: &'a PaymentRequest) -> Result<&'a str> {
        match request.details() {
            PaymentDetails::Wallet { user_id } => required("wallet_user_id", user_id),
            other => Err(payload_mismatch(self.method(), other.method())),
        }
    }
}

#[async_trait]
impl PaymentMethodStrategy for WalletPaymentStrategy {
    fn validate(&self, request: &PaymentRequest) -> Result<()> {
        self.user_id(request).map(|_| ())
    }

    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let user_id = self.user_id(request)?;
        let receipt = with_deadline(
            self.timeout,
            "wallet provider",
            self.gateway.pay(user_id, request.amount()),
        )
        .await?;

        // Anything but an explicit success is a business failure.
        let status = if receipt.status == SUCCESS_STATUS {
            PaymentStatus::Success
        } else {
            PaymentStatus::Failed
        };
        Ok(PaymentResult::new(
            receipt.tid,
            self.method(),
            request.amount(),
            status,
        ))
    }

    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult> {
        with_deadline(
            self.timeout,
            "wallet provider",
            self.gateway.cancel(transaction_id),
        )
        .await
    }

    fn method(&self) -> PaymentMethod {
        PaymentMethod::Wallet
    }
}
