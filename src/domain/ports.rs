use super::request::Amount;
use super::result::{CancelResult, TransactionId};
use crate::error::Result;
use async_trait::async_trait;

/// Card network authorization response. Response code `"00"` means approved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAuthorization {
    pub transaction_id: TransactionId,
    pub response_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankTransferReceipt {
    pub transaction_id: TransactionId,
    pub success: bool,
}

/// Wallet provider response carrying a textual status such as `"SUCCESS"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletReceipt {
    pub tid: TransactionId,
    pub status: String,
}

#[async_trait]
pub trait CardGateway: Send + Sync {
    async fn authorize(
        &self,
        card_number: &str,
        cvc: &str,
        amount: Amount,
    ) -> Result<CardAuthorization>;
    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult>;
}

#[async_trait]
pub trait BankGateway: Send + Sync {
    async fn transfer(
        &self,
        bank_code: &str,
        account_number: &str,
        amount: Amount,
    ) -> Result<BankTransferReceipt>;
    async fn cancel_transfer(&self, transaction_id: &TransactionId) -> Result<CancelResult>;
}

#[async_trait]
pub trait WalletGateway: Send + Sync {
    async fn pay(&self, user_id: &str, amount: Amount) -> Result<WalletReceipt>;
    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult>;
}

pub type CardGatewayBox = Box<dyn CardGateway>;
pub type BankGatewayBox = Box<dyn BankGateway>;
pub type WalletGatewayBox = Box<dyn WalletGateway>;
