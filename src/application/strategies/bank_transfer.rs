use super::{payload_mismatch, required, with_deadline};
use crate::config::DEFAULT_BACKEND_TIMEOUT;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::BankGatewayBox;
use crate::domain::request::{PaymentDetails, PaymentRequest};
use crate::domain::result::{CancelResult, PaymentResult, PaymentStatus, TransactionId};
use crate::domain::strategy::PaymentMethodStrategy;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Account-to-account transfers through the bank gateway.
///
/// Bank code and account number are checked for presence only.
pub struct BankTransferStrategy {
    gateway: BankGatewayBox,
    timeout: Duration,
}

impl BankTransferStrategy {
    pub fn new(gateway: BankGatewayBox) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_BACKEND_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn account<'a>(&self, request: &'a PaymentRequest) -> Result<(&'a str, &'a str)> {
        let PaymentDetails::BankTransfer {
            bank_code,
            account_number,
        } = request.details()
        else {
            return Err(payload_mismatch(self.method(), request.details().method()));
        };
        Ok((
            required("bank_code", bank_code)?,
            required("account_number", account_number)?,
        ))
    }
}

#[async_trait]
impl PaymentMethodStrategy for BankTransferStrategy {
    fn validate(&self, request: &PaymentRequest) -> Result<()> {
        self.account(request).map(|_| ())
    }

    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let (bank_code, account_number) = self.account(request)?;
        let receipt = with_deadline(
            self.timeout,
            "bank",
            self.gateway
                .transfer(bank_code, account_number, request.amount()),
        )
        .await?;

        let status = if receipt.success {
            PaymentStatus::Success
        } else {
            PaymentStatus::Failed
        };
        Ok(PaymentResult::new(
            receipt.transaction_id,
            self.method(),
            request.amount(),
            status,
        ))
    }

    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult> {
        with_deadline(
            self.timeout,
            "bank",
            self.gateway.cancel_transfer(transaction_id),
        )
        .await
    }

    fn method(&self) -> PaymentMethod {
        PaymentMethod::BankTransfer
    }
}
