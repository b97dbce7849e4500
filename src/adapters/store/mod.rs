//! User store adapters.
//!
//! - `in_memory` - Test and development store with no external services
//! - `postgres` - Production store backed by PostgreSQL

mod in_memory;
mod postgres;

pub use in_memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
