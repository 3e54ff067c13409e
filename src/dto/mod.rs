//! DTO modules that bridge services with the JSON API.

pub mod api;
pub mod contact;
pub mod professional;
pub mod projection;

/// Serializes optional dates as `dd/MM/yyyy`.
pub(crate) mod display_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}
