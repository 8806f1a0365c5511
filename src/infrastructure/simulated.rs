use crate::domain::ports::{
    BankGateway, BankTransferReceipt, CardAuthorization, CardGateway, WalletGateway,
    WalletReceipt,
};
use crate::domain::request::Amount;
use crate::domain::result::{CancelResult, TransactionId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Issues `PREFIX_<millis>_<seq>`. The sequence keeps ids distinct even for
/// calls landing in the same millisecond.
fn next_transaction_id(prefix: &str) -> TransactionId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    TransactionId(format!("{}_{}_{}", prefix, millis, seq))
}

/// The simulated backends accept every cancellation, known id or not.
fn accept_cancellation(transaction_id: &TransactionId) -> CancelResult {
    CancelResult::success(
        transaction_id.clone(),
        TransactionId(format!("CANCEL_{}", transaction_id)),
        Amount::ZERO,
    )
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

fn mask_card_number(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().collect();
    if digits.len() < 16 {
        return "*".repeat(digits.len());
    }
    let head: String = digits[..4].iter().collect();
    let tail: String = digits[12..].iter().collect();
    format!("{}-****-****-{}", head, tail)
}

/// In-process stand-in for the card network. Always approves with `"00"`.
#[derive(Debug, Default, Clone)]
pub struct SimulatedCardNetwork {
    latency: Duration,
}

impl SimulatedCardNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl CardGateway for SimulatedCardNetwork {
    async fn authorize(
        &self,
        card_number: &str,
        _cvc: &str,
        amount: Amount,
    ) -> Result<CardAuthorization> {
        simulate_latency(self.latency).await;
        tracing::info!(card = %mask_card_number(card_number), %amount, "card authorization requested");
        Ok(CardAuthorization {
            transaction_id: next_transaction_id("CARD_TXN"),
            response_code: "00".to_string(),
        })
    }

    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult> {
        simulate_latency(self.latency).await;
        tracing::info!(%transaction_id, "card authorization cancelled");
        Ok(accept_cancellation(transaction_id))
    }
}

/// In-process stand-in for the bank. Every transfer succeeds.
#[derive(Debug, Default, Clone)]
pub struct SimulatedBank {
    latency: Duration,
}

impl SimulatedBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl BankGateway for SimulatedBank {
    async fn transfer(
        &self,
        bank_code: &str,
        account_number: &str,
        amount: Amount,
    ) -> Result<BankTransferReceipt> {
        simulate_latency(self.latency).await;
        tracing::info!(bank_code, account_number, %amount, "bank transfer requested");
        Ok(BankTransferReceipt {
            transaction_id: next_transaction_id("BANK_TXN"),
            success: true,
        })
    }

    async fn cancel_transfer(&self, transaction_id: &TransactionId) -> Result<CancelResult> {
        simulate_latency(self.latency).await;
        tracing::info!(%transaction_id, "bank transfer cancelled");
        Ok(accept_cancellation(transaction_id))
    }
}

/// In-process stand-in for the wallet provider.
///
/// Answers with a configurable textual status, `"SUCCESS"` unless told
/// otherwise.
#[derive(Debug, Clone)]
pub struct SimulatedWalletProvider {
    status: String,
    latency: Duration,
}

impl Default for SimulatedWalletProvider {
    fn default() -> Self {
        Self {
            status: "SUCCESS".to_string(),
            latency: Duration::ZERO,
        }
    }
}

impl SimulatedWalletProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl WalletGateway for SimulatedWalletProvider {
    async fn pay(&self, user_id: &str, amount: Amount) -> Result<WalletReceipt> {
        simulate_latency(self.latency).await;
        tracing::info!(user_id, %amount, status = %self.status, "wallet payment requested");
        Ok(WalletReceipt {
            tid: next_transaction_id("WALLET_TID"),
            status: self.status.clone(),
        })
    }

    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult> {
        simulate_latency(self.latency).await;
        tracing::info!(%transaction_id, "wallet payment cancelled");
        Ok(accept_cancellation(transaction_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("1234567890123456"), "1234-****-****-3456");
        assert_eq!(mask_card_number("1234"), "****");
    }

    #[test]
    fn test_transaction_ids_are_distinct() {
        let first = next_transaction_id("CARD_TXN");
        let second = next_transaction_id("CARD_TXN");
        assert_ne!(first, second);
        assert!(first.as_str().starts_with("CARD_TXN_"));
    }

    #[tokio::test]
    async fn test_card_network_approves() {
        let network = SimulatedCardNetwork::new();
        let authorization = network
            .authorize("1234567890123456", "123", Amount::ZERO)
            .await
            .unwrap();
        assert_eq!(authorization.response_code, "00");
    }

    #[tokio::test]
    async fn test_bank_cancels_unknown_transfer() {
        let bank = SimulatedBank::new();
        let result = bank
            .cancel_transfer(&TransactionId::new("NEVER_ISSUED"))
            .await
            .unwrap();
        assert!(result.is_success());
        assert_eq!(
            result.cancel_transaction_id().map(TransactionId::as_str),
            Some("CANCEL_NEVER_ISSUED")
        );
    }

    #[tokio::test]
    async fn test_wallet_reports_configured_status() {
        let wallet = SimulatedWalletProvider::new().with_status("FAILED");
        let receipt = wallet.pay("wallet_user_123", Amount::ZERO).await.unwrap();
        assert_eq!(receipt.status, "FAILED");
        assert!(receipt.tid.as_str().starts_with("WALLET_TID_"));
    }
}
