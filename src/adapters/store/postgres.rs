//! PostgreSQL implementation of the user store.
//!
//! Expects the following schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id            UUID PRIMARY KEY,
//!     email         TEXT NOT NULL,
//!     auth_provider TEXT,
//!     auth_id       TEXT,
//!     public_key    TEXT,
//!     created_at    TIMESTAMPTZ NOT NULL,
//!     updated_at    TIMESTAMPTZ NOT NULL,
//!     CONSTRAINT users_provider_identity_key UNIQUE (auth_provider, auth_id)
//! );
//! ```
//!
//! The unique constraint is what makes concurrent first logins converge
//! on one row; losing inserts surface as `UniquenessConflict` and the
//! caller re-reads the winner. PostgreSQL treats NULLs as distinct, so
//! password accounts (NULL provider, NULL auth_id) never collide on it.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{AuthProvider, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::{StoreError, UserProjection, UserStore};

/// PostgreSQL implementation of `UserStore`.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    /// Creates a new PostgresUserStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_provider_identity(
        &self,
        provider: AuthProvider,
        auth_id: &str,
        projection: UserProjection,
    ) -> Result<Option<User>, StoreError> {
        // The standard projection nulls the column out at the database,
        // so key material never crosses the wire unrequested.
        let query = match projection {
            UserProjection::Standard => {
                r#"
                SELECT id, email, auth_provider, auth_id,
                       NULL::text AS public_key, created_at, updated_at
                FROM users
                WHERE auth_provider = $1 AND auth_id = $2
                "#
            }
            UserProjection::WithPublicKey => {
                r#"
                SELECT id, email, auth_provider, auth_id,
                       public_key, created_at, updated_at
                FROM users
                WHERE auth_provider = $1 AND auth_id = $2
                "#
            }
        };

        let row = sqlx::query(query)
            .bind(provider.as_str())
            .bind(auth_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable(format!("Failed to fetch user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = User::provision(new_user);

        let result = sqlx::query(
            r#"
            INSERT INTO users (
                id, email, auth_provider, auth_id, public_key, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.email)
        .bind(user.auth_provider.map(|p| p.as_str()))
        .bind(&user.auth_id)
        .bind(&user.public_key)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::UniquenessConflict)
            }
            Err(e) => Err(StoreError::unavailable(format!(
                "Failed to insert user: {}",
                e
            ))),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<User, StoreError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| StoreError::unavailable(format!("Failed to get id: {}", e)))?;

    let email: String = row
        .try_get("email")
        .map_err(|e| StoreError::unavailable(format!("Failed to get email: {}", e)))?;

    let provider_str: Option<String> = row
        .try_get("auth_provider")
        .map_err(|e| StoreError::unavailable(format!("Failed to get auth_provider: {}", e)))?;
    let auth_provider = match provider_str {
        Some(s) => Some(AuthProvider::from_str(&s).map_err(|e| {
            StoreError::unavailable(format!("Invalid auth_provider in row: {}", e))
        })?),
        None => None,
    };

    let auth_id: Option<String> = row
        .try_get("auth_id")
        .map_err(|e| StoreError::unavailable(format!("Failed to get auth_id: {}", e)))?;

    let public_key: Option<String> = row
        .try_get("public_key")
        .map_err(|e| StoreError::unavailable(format!("Failed to get public_key: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| StoreError::unavailable(format!("Failed to get created_at: {}", e)))?;

    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| StoreError::unavailable(format!("Failed to get updated_at: {}", e)))?;

    Ok(User {
        id: UserId::from_uuid(id),
        email,
        auth_provider,
        auth_id,
        public_key,
        created_at,
        updated_at,
    })
}
