//! User account records.

mod account;

pub use account::{NewUser, User};
