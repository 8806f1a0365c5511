use super::{payload_mismatch, with_deadline};
use crate::config::DEFAULT_BACKEND_TIMEOUT;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::CardGatewayBox;
use crate::domain::request::{PaymentDetails, PaymentRequest};
use crate::domain::result::{CancelResult, PaymentResult, PaymentStatus, TransactionId};
use crate::domain::strategy::PaymentMethodStrategy;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::time::Duration;

const CARD_NUMBER_LEN: usize = 16;
const CVC_LEN: usize = 3;
const APPROVED: &str = "00";

/// Card payments through the card network gateway.
pub struct CardPaymentStrategy {
    gateway: CardGatewayBox,
    timeout: Duration,
}

impl CardPaymentStrategy {
    pub fn new(gateway: CardGatewayBox) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_BACKEND_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn credentials<'a>(&self, request: &'a PaymentRequest) -> Result<(&'a str, &'a str)> {
        let PaymentDetails::Card { card_number, cvc } = request.details() else {
            return Err(payload_mismatch(self.method(), request.details().method()));
        };
        let card_number = card_number
            .as_deref()
            .filter(|n| n.chars().count() == CARD_NUMBER_LEN)
            .ok_or_else(|| PaymentError::validation("card_number", "invalid card number"))?;
        let cvc = cvc
            .as_deref()
            .filter(|c| c.chars().count() == CVC_LEN)
            .ok_or_else(|| PaymentError::validation("cvc", "invalid CVC"))?;
        Ok((card_number, cvc))
    }
}

#[async_trait]
impl PaymentMethodStrategy for CardPaymentStrategy {
    fn validate(&self, request: &PaymentRequest) -> Result<()> {
        self.credentials(request).map(|_| ())
    }

    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let (card_number, cvc) = self.credentials(request)?;
        let authorization = with_deadline(
            self.timeout,
            "card network",
            self.gateway.authorize(card_number, cvc, request.amount()),
        )
        .await?;

        let status = if authorization.response_code == APPROVED {
            PaymentStatus::Success
        } else {
            tracing::debug!(code = %authorization.response_code, "card authorization declined");
            PaymentStatus::Failed
        };
        Ok(PaymentResult::new(
            authorization.transaction_id,
            self.method(),
            request.amount(),
            status,
        ))
    }

    async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult> {
        with_deadline(
            self.timeout,
            "card network",
            self.gateway.cancel(transaction_id),
        )
        .await
    }

    fn method(&self) -> PaymentMethod {
        PaymentMethod::Card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CardAuthorization, CardGateway};
    use crate::domain::request::{Amount, OrderId};
    use rust_decimal_macros::dec;

    struct FixedCodeGateway(&'static str);

    #[async_trait]
    impl CardGateway for FixedCodeGateway {
        async fn authorize(&self, _: &str, _: &str, _: Amount) -> Result<CardAuthorization> {
            Ok(CardAuthorization {
                transaction_id: TransactionId::new("CARD_TXN_TEST"),
                response_code: self.0.to_string(),
            })
        }

        async fn cancel(&self, transaction_id: &TransactionId) -> Result<CancelResult> {
            Ok(CancelResult::fail(transaction_id.clone()))
        }
    }

    fn strategy(code: &'static str) -> CardPaymentStrategy {
        CardPaymentStrategy::new(Box::new(FixedCodeGateway(code)))
    }

    fn card(card_number: Option<&str>, cvc: Option<&str>) -> PaymentRequest {
        PaymentRequest::new(
            OrderId(1001),
            Amount::new(dec!(50000)).unwrap(),
            PaymentDetails::Card {
                card_number: card_number.map(str::to_string),
                cvc: cvc.map(str::to_string),
            },
        )
    }

    #[test]
    fn test_validate_accepts_complete_card() {
        assert!(strategy(APPROVED)
            .validate(&card(Some("1234567890123456"), Some("123")))
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_card_number() {
        for number in [None, Some(""), Some("123456789012345"), Some("12345678901234567")] {
            let result = strategy(APPROVED).validate(&card(number, Some("123")));
            assert!(matches!(
                result,
                Err(PaymentError::ValidationFailed { field: "card_number", .. })
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_cvc() {
        for cvc in [None, Some("12"), Some("1234")] {
            let result = strategy(APPROVED).validate(&card(Some("1234567890123456"), cvc));
            assert!(matches!(
                result,
                Err(PaymentError::ValidationFailed { field: "cvc", .. })
            ));
        }
    }

    #[test]
    fn test_validate_rejects_foreign_payload() {
        let request = PaymentRequest::wallet(OrderId(1), Amount::ZERO, "user");
        assert!(matches!(
            strategy(APPROVED).validate(&request),
            Err(PaymentError::ValidationFailed { field: "details", .. })
        ));
    }

    #[tokio::test]
    async fn test_response_code_maps_to_status() {
        let request = card(Some("1234567890123456"), Some("123"));

        let approved = strategy(APPROVED).pay(&request).await.unwrap();
        assert_eq!(approved.status(), PaymentStatus::Success);
        assert_eq!(approved.method(), PaymentMethod::Card);

        let declined = strategy("51").pay(&request).await.unwrap();
        assert_eq!(declined.status(), PaymentStatus::Failed);
    }

    #[tokio::test]
    async fn test_cancel_is_returned_verbatim() {
        let result = strategy(APPROVED)
            .cancel(&TransactionId::new("CARD_TXN_9"))
            .await
            .unwrap();
        assert_eq!(result, CancelResult::fail(TransactionId::new("CARD_TXN_9")));
    }
}
