//! Database models shared across the registry repository.

#[cfg(feature = "server")]
pub mod config;
pub mod contact;
pub mod professional;
