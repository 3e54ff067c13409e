//! Business rules for the registry, generic over the repository traits.

pub mod contact;
pub mod errors;
pub mod professional;

pub use errors::{ServiceError, ServiceResult};

/// Date stamped on newly created records.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
