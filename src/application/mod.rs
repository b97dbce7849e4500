//! Application layer - login orchestration shared by provider strategies.

pub mod login;

pub use login::LoginResolver;
