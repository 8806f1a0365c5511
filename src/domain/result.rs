use super::method::PaymentMethod;
use super::request::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-issued opaque identifier of one payment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Failed,
    Pending,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a payment call that reached its backend.
///
/// A business failure reported by the backend is a `PaymentResult` with
/// `status == Failed`, never an error. The status has no default.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentResult {
    transaction_id: TransactionId,
    method: PaymentMethod,
    amount: Amount,
    status: PaymentStatus,
}

impl PaymentResult {
    pub fn new(
        transaction_id: TransactionId,
        method: PaymentMethod,
        amount: Amount,
        status: PaymentStatus,
    ) -> Self {
        Self {
            transaction_id,
            method,
            amount,
            status,
        }
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Success
    }
}

impl fmt::Display for PaymentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} paid (transaction id: {})",
            self.method, self.amount, self.transaction_id
        )?;
        if !self.is_success() {
            write!(f, " status: {}", self.status)?;
        }
        Ok(())
    }
}

/// Outcome of a cancellation.
///
/// Only the `success` and `fail` factories build one, so a failed
/// cancellation never carries a cancel id or a refund.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelResult {
    transaction_id: TransactionId,
    cancel_transaction_id: Option<TransactionId>,
    refund_amount: Amount,
    success: bool,
}

impl CancelResult {
    pub fn success(
        transaction_id: TransactionId,
        cancel_transaction_id: TransactionId,
        refund_amount: Amount,
    ) -> Self {
        Self {
            transaction_id,
            cancel_transaction_id: Some(cancel_transaction_id),
            refund_amount,
            success: true,
        }
    }

    pub fn fail(transaction_id: TransactionId) -> Self {
        Self {
            transaction_id,
            cancel_transaction_id: None,
            refund_amount: Amount::ZERO,
            success: false,
        }
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub fn cancel_transaction_id(&self) -> Option<&TransactionId> {
        self.cancel_transaction_id.as_ref()
    }

    pub fn refund_amount(&self) -> Amount {
        self.refund_amount
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}
