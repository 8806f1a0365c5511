use super::method::PaymentMethod;
use crate::error::PaymentError;
use rust_decimal::Decimal;
use std::fmt;

/// Opaque identifier of the order a payment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a non-negative monetary amount.
///
/// This is a wrapper around `rust_decimal::Decimal` so that money never goes
/// through binary floating point. Zero is a valid amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::validation(
                "amount",
                "amount must not be negative",
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Method-specific payload of a payment request.
///
/// Each variant carries only the fields its method uses. Fields stay optional
/// so a strategy can tell "not supplied" (`None`) from "supplied empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    Card {
        card_number: Option<String>,
        cvc: Option<String>,
    },
    BankTransfer {
        bank_code: Option<String>,
        account_number: Option<String>,
    },
    Wallet {
        user_id: Option<String>,
    },
}

impl PaymentDetails {
    /// The payment method whose payload shape this is.
    pub fn method(&self) -> PaymentMethod {
        match self {
            Self::Card { .. } => PaymentMethod::Card,
            Self::BankTransfer { .. } => PaymentMethod::BankTransfer,
            Self::Wallet { .. } => PaymentMethod::Wallet,
        }
    }
}

/// An immutable payment attempt.
///
/// The method tag passed next to the request at dispatch time must match
/// `details`; strategies check this during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    order_id: OrderId,
    amount: Amount,
    details: PaymentDetails,
}

impl PaymentRequest {
    pub fn new(order_id: OrderId, amount: Amount, details: PaymentDetails) -> Self {
        Self {
            order_id,
            amount,
            details,
        }
    }

    pub fn card(
        order_id: OrderId,
        amount: Amount,
        card_number: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self::new(
            order_id,
            amount,
            PaymentDetails::Card {
                card_number: Some(card_number.into()),
                cvc: Some(cvc.into()),
            },
        )
    }

    pub fn bank_transfer(
        order_id: OrderId,
        amount: Amount,
        bank_code: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self::new(
            order_id,
            amount,
            PaymentDetails::BankTransfer {
                bank_code: Some(bank_code.into()),
                account_number: Some(account_number.into()),
            },
        )
    }

    pub fn wallet(order_id: OrderId, amount: Amount, user_id: impl Into<String>) -> Self {
        Self::new(
            order_id,
            amount,
            PaymentDetails::Wallet {
                user_id: Some(user_id.into()),
            },
        )
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn details(&self) -> &PaymentDetails {
        &self.details
    }
}
