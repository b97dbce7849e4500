//! In-memory user store for testing.
//!
//! Implements the `UserStore` port over a plain map, avoiding the need
//! for a database in tests. Enforces the same `(auth_provider, auth_id)`
//! uniqueness the PostgreSQL schema does, so race-recovery paths can be
//! exercised without one.
//!
//! # Example
//!
//! ```ignore
//! use identity_bridge::adapters::store::InMemoryUserStore;
//! use identity_bridge::ports::{UserProjection, UserStore};
//!
//! let store = InMemoryUserStore::new();
//! let user = store.create(new_user).await?;
//! let found = store
//!     .find_by_provider_identity(provider, "subject", UserProjection::Standard)
//!     .await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthProvider, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::{StoreError, UserProjection, UserStore};

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    /// Accounts keyed by user id
    users: RwLock<HashMap<UserId, User>>,
    /// Optional error to return for all operations (for error testing)
    force_error: RwLock<Option<StoreError>>,
}

impl InMemoryUserStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an existing account.
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }

    /// Forces all operations to return the specified error.
    pub fn with_error(self, error: StoreError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Inserts an account at runtime, replacing any row with the same id.
    pub fn add_user(&self, user: User) {
        self.users.write().unwrap().insert(user.id, user);
    }

    /// Sets key material on an account, marking onboarding complete.
    pub fn set_public_key(&self, id: &UserId, public_key: impl Into<String>) {
        if let Some(user) = self.users.write().unwrap().get_mut(id) {
            user.public_key = Some(public_key.into());
        }
    }

    /// Returns the number of stored accounts.
    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    fn forced_error(&self) -> Option<StoreError> {
        self.force_error.read().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_provider_identity(
        &self,
        provider: AuthProvider,
        auth_id: &str,
        projection: UserProjection,
    ) -> Result<Option<User>, StoreError> {
        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        let found = self
            .users
            .read()
            .unwrap()
            .values()
            .find(|user| user.matches_provider_identity(provider, auth_id))
            .cloned();

        Ok(found.map(|mut user| {
            if projection == UserProjection::Standard {
                user.public_key = None;
            }
            user
        }))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        // Single lock covers the existence check and the insert.
        let mut users = self.users.write().unwrap();

        let taken = users
            .values()
            .any(|user| user.matches_provider_identity(new_user.auth_provider, &new_user.auth_id));
        if taken {
            return Err(StoreError::UniquenessConflict);
        }

        let user = User::provision(new_user);
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
