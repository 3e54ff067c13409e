//! JSON request bodies accepted by the create and update endpoints.

pub mod contact;
pub mod professional;
