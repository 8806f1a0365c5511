use crate::domain::method::PaymentMethod;
use crate::domain::request::{Amount, OrderId, PaymentDetails, PaymentRequest};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One flat input row. Every method's columns share the row; only the ones
/// belonging to `method` are kept when converting to a `PaymentRequest`.
///
/// `amount` stays text until conversion so it is parsed straight into a
/// `Decimal`, never through `f64`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub method: String,
    pub order_id: Option<u64>,
    pub amount: Option<String>,
    pub card_number: Option<String>,
    pub cvc: Option<String>,
    pub bank_code: Option<String>,
    pub account_number: Option<String>,
    pub wallet_user_id: Option<String>,
}

impl TryFrom<PaymentRecord> for (PaymentMethod, PaymentRequest) {
    type Error = PaymentError;

    fn try_from(record: PaymentRecord) -> Result<Self> {
        let method = record
            .method
            .parse::<PaymentMethod>()
            .map_err(|e| PaymentError::validation("method", e.to_string()))?;
        let order_id = record
            .order_id
            .map(OrderId)
            .ok_or_else(|| PaymentError::validation("order_id", "required"))?;
        let amount = record
            .amount
            .as_deref()
            .ok_or_else(|| PaymentError::validation("amount", "required"))
            .and_then(parse_amount)?;

        let details = match method {
            PaymentMethod::Card => PaymentDetails::Card {
                card_number: record.card_number,
                cvc: record.cvc,
            },
            PaymentMethod::BankTransfer => PaymentDetails::BankTransfer {
                bank_code: record.bank_code,
                account_number: record.account_number,
            },
            PaymentMethod::Wallet => PaymentDetails::Wallet {
                user_id: record.wallet_user_id,
            },
        };
        Ok((method, PaymentRequest::new(order_id, amount, details)))
    }
}

fn parse_amount(raw: &str) -> Result<Amount> {
    let value = Decimal::from_str_exact(raw).map_err(|e| {
        PaymentError::validation("amount", format!("'{}' is not a decimal amount: {}", raw, e))
    })?;
    Amount::new(value)
}

/// Reads payment rows from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<PaymentRecord>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct PaymentRecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentRecordReader<R> {
    /// Creates a new `PaymentRecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    pub fn records(self) -> impl Iterator<Item = Result<PaymentRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }

    /// Like `records`, but also converts every row into a dispatchable
    /// method and request.
    pub fn requests(self) -> impl Iterator<Item = Result<(PaymentMethod, PaymentRequest)>> {
        self.records()
            .map(|record| record.and_then(<(PaymentMethod, PaymentRequest)>::try_from))
    }
}
