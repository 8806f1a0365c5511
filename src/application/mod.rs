//! Application layer containing the payment dispatch orchestration.
//!
//! This module defines the `PaymentDispatchService`, the primary entry point
//! for processing and cancelling payments, the `StrategyRegistry` it resolves
//! strategies from, and the built-in per-method strategies.

pub mod dispatch;
pub mod registry;
pub mod strategies;
