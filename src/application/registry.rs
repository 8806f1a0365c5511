use super::strategies::{BankTransferStrategy, CardPaymentStrategy, WalletPaymentStrategy};
use crate::config::{DispatchConfig, RegistrationPolicy};
use crate::domain::method::PaymentMethod;
use crate::domain::strategy::StrategyRef;
use crate::error::{PaymentError, Result};
use crate::infrastructure::simulated::{SimulatedBank, SimulatedCardNetwork, SimulatedWalletProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps each payment method to the strategy serving it.
///
/// Registration takes `&mut self`, so the registry is fully populated before
/// it is frozen behind an `Arc` and shared. Lookups afterwards are plain
/// reads with no locking.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: HashMap<PaymentMethod, StrategyRef>,
    policy: RegistrationPolicy,
}

impl StrategyRegistry {
    /// Creates an empty registry where the latest registration wins.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RegistrationPolicy) -> Self {
        Self {
            strategies: HashMap::new(),
            policy,
        }
    }

    /// Builds a registry wired to the simulated backends for all three methods.
    pub fn with_simulated_backends(config: &DispatchConfig) -> Result<Self> {
        let mut registry = Self::with_policy(config.registration);
        registry.register(Arc::new(
            CardPaymentStrategy::new(Box::new(SimulatedCardNetwork::new()))
                .with_timeout(config.backend_timeout),
        ))?;
        registry.register(Arc::new(
            BankTransferStrategy::new(Box::new(SimulatedBank::new()))
                .with_timeout(config.backend_timeout),
        ))?;
        registry.register(Arc::new(
            WalletPaymentStrategy::new(Box::new(
                SimulatedWalletProvider::new().with_status(config.wallet_status.clone()),
            ))
            .with_timeout(config.backend_timeout),
        ))?;
        Ok(registry)
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Registers `strategy` under the method it reports.
    ///
    /// With `Overwrite` the previous strategy, if any, is replaced and
    /// returned. With `Strict` a duplicate is rejected and the existing entry
    /// stays in place.
    pub fn register(&mut self, strategy: StrategyRef) -> Result<Option<StrategyRef>> {
        let method = strategy.method();
        if self.policy == RegistrationPolicy::Strict && self.strategies.contains_key(&method) {
            tracing::warn!(%method, "rejected duplicate strategy registration");
            return Err(PaymentError::DuplicateRegistration(method));
        }

        let previous = self.strategies.insert(method, strategy);
        if previous.is_some() {
            tracing::info!(%method, "replaced registered strategy");
        } else {
            tracing::debug!(%method, "registered strategy");
        }
        Ok(previous)
    }

    /// Returns the strategy for `method`, or `UnsupportedMethod`.
    pub fn get_strategy(&self, method: PaymentMethod) -> Result<StrategyRef> {
        self.strategies
            .get(&method)
            .cloned()
            .ok_or(PaymentError::UnsupportedMethod(method))
    }

    pub fn contains(&self, method: PaymentMethod) -> bool {
        self.strategies.contains_key(&method)
    }

    /// Registered methods in declaration order.
    pub fn methods(&self) -> Vec<PaymentMethod> {
        let mut methods: Vec<_> = self.strategies.keys().copied().collect();
        methods.sort();
        methods
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
