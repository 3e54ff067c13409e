//! Domain aggregates exposed by the registry service layer.

pub mod contact;
pub mod professional;
pub mod types;
