#![allow(dead_code)]

use async_trait::async_trait;
use paydispatch::domain::ports::{WalletGateway, WalletReceipt};
use paydispatch::domain::request::{Amount, OrderId, PaymentRequest};
use paydispatch::domain::result::{CancelResult, TransactionId};
use paydispatch::error::Result;
use rand::Rng;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const HEADER: [&str; 8] = [
    "method",
    "order_id",
    "amount",
    "card_number",
    "cvc",
    "bank_code",
    "account_number",
    "wallet_user_id",
];

pub fn card_request(order_id: u64) -> PaymentRequest {
    PaymentRequest::card(
        OrderId(order_id),
        Amount::new(dec!(50000)).unwrap(),
        "1234567890123456",
        "123",
    )
}

pub fn bank_request(order_id: u64) -> PaymentRequest {
    PaymentRequest::bank_transfer(
        OrderId(order_id),
        Amount::new(dec!(12500.50)).unwrap(),
        "004",
        "110-222-333333",
    )
}

pub fn wallet_request(order_id: u64) -> PaymentRequest {
    PaymentRequest::wallet(
        OrderId(order_id),
        Amount::new(dec!(30000)).unwrap(),
        "wallet_user_123",
    )
}

/// Wallet stub answering with a fixed textual status and counting calls.
#[derive(Clone)]
pub struct StubWallet {
    pub status: &'static str,
    pub payments: Arc<AtomicUsize>,
}

impl StubWallet {
    pub fn new(status: &'static str) -> Self {
        Self {
            status,
            payments: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn payments(&self) -> usize {
        self.payments.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletGateway for StubWallet {
    async fn pay(&self, _user_id: &str, _amount: Amount) -> Result<WalletReceipt> {
        let n = self.payments.fetch_add(1, Ordering::SeqCst);
        Ok(WalletReceipt {
            tid: TransactionId(format!("STUB_TID_{}", n)),
            status: self.status.to_string(),
        })
    }

    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult> {
        Ok(CancelResult::fail(transaction_id.clone()))
    }
}

pub fn generate_csv(path: &Path, rows: usize) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    let mut rng = rand::thread_rng();
    for i in 1..=rows {
        let order_id = i.to_string();
        let order_id = order_id.as_str();
        let amount = format!("{}.{:02}", rng.gen_range(0..100_000), rng.gen_range(0..100));
        let amount = amount.as_str();
        let row = match rng.gen_range(0..3) {
            0 => ["CARD", order_id, amount, "1234567890123456", "123", "", "", ""],
            1 => ["BANK_TRANSFER", order_id, amount, "", "", "004", "110-222", ""],
            _ => ["WALLET", order_id, amount, "", "", "", "", "wallet_user_123"],
        };
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
