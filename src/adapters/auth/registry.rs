//! Strategy registry.
//!
//! All provider strategies are constructed once from configuration and
//! frozen into a `StrategySet`. Lookups after startup never mutate the
//! set, so it can be shared across tasks without locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::adapters::auth::{GoogleStrategy, SamlStrategy};
use crate::adapters::token::JwtBridgeTokenIssuer;
use crate::application::LoginResolver;
use crate::config::AppConfig;
use crate::domain::foundation::AuthProvider;
use crate::ports::{BridgeTokenIssuer, ProviderStrategy, UserStore};

/// Immutable set of provider strategies, keyed by provider.
pub struct StrategySet {
    strategies: HashMap<AuthProvider, Arc<dyn ProviderStrategy>>,
}

impl StrategySet {
    /// Builds the full strategy set with the JWT issuer from configuration.
    pub fn from_config(config: &AppConfig, store: Arc<dyn UserStore>) -> Self {
        let issuer: Arc<dyn BridgeTokenIssuer> =
            Arc::new(JwtBridgeTokenIssuer::new(config.bridge_token.clone()));
        Self::with_issuer(config, store, issuer)
    }

    /// Builds the strategy set around a caller-supplied token issuer.
    pub fn with_issuer(
        config: &AppConfig,
        store: Arc<dyn UserStore>,
        issuer: Arc<dyn BridgeTokenIssuer>,
    ) -> Self {
        let mut strategies: HashMap<AuthProvider, Arc<dyn ProviderStrategy>> = HashMap::new();

        strategies.insert(
            AuthProvider::Google,
            Arc::new(GoogleStrategy::new(
                config.google.clone(),
                LoginResolver::new(store.clone(), issuer.clone()),
            )),
        );

        strategies.insert(
            AuthProvider::Saml,
            Arc::new(SamlStrategy::new(
                config.saml.clone(),
                LoginResolver::new(store, issuer),
            )),
        );

        Self { strategies }
    }

    /// Looks up the strategy for a provider.
    pub fn strategy(&self, provider: AuthProvider) -> Option<Arc<dyn ProviderStrategy>> {
        self.strategies.get(&provider).cloned()
    }

    /// Providers this set can handle, in no particular order.
    pub fn providers(&self) -> Vec<AuthProvider> {
        self.strategies.keys().copied().collect()
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// True when no strategies are registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategySet")
            .field("providers", &self.providers())
            .finish()
    }
}
