//! Identity Bridge - Multi-provider authentication subsystem
//!
//! This crate reduces logins arriving through external identity providers
//! (Google OAuth2, SAML SSO) to a single internal identity representation,
//! provisioning user accounts on first login and minting short-lived bridge
//! tokens that carry identity into the next step of the login flow.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
