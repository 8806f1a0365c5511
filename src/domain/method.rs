use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of payment channels a request can use.
///
/// Adding a member also requires a matching strategy; the registry never
/// infers behavior from the tag alone.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    BankTransfer,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Card, Self::BankTransfer, Self::Wallet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "CARD",
            Self::BankTransfer => "BANK_TRANSFER",
            Self::Wallet => "WALLET",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown payment method '{0}'")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing_is_case_insensitive() {
        assert_eq!("card".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert_eq!(
            " Bank_Transfer ".parse::<PaymentMethod>(),
            Ok(PaymentMethod::BankTransfer)
        );
        assert_eq!("WALLET".parse::<PaymentMethod>(), Ok(PaymentMethod::Wallet));
        assert!("cash".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_unknown_method_error_message() {
        let err = "cash".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(err, UnknownPaymentMethod("cash".to_string()));
        assert_eq!(err.to_string(), "unknown payment method 'cash'");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_method_serialization() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"BANK_TRANSFER\"");

        let method: PaymentMethod = serde_json::from_str("\"WALLET\"").unwrap();
        assert_eq!(method, PaymentMethod::Wallet);
    }

    #[test]
    fn test_display_matches_wire_name() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.to_string(), method.as_str());
        }
    }
}
