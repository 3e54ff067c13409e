//! JSON representation of a contact.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::contact::Contact;
use crate::dto::display_date;
use crate::dto::projection::{FieldCopier, SparseFields};

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contato: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "display_date::serialize"
    )]
    #[schema(value_type = Option<String>, example = "17/05/1990")]
    pub created_date: Option<NaiveDate>,
    /// Name of the owning professional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profissional: Option<String>,
}

impl SparseFields for ContactDto {
    const FIELDS: &'static [FieldCopier<Self>] = &[
        ("id", |src, dst| dst.id = src.id),
        ("nome", |src, dst| dst.nome.clone_from(&src.nome)),
        ("contato", |src, dst| dst.contato.clone_from(&src.contato)),
        ("createdDate", |src, dst| dst.created_date = src.created_date),
        ("profissional", |src, dst| {
            dst.profissional.clone_from(&src.profissional)
        }),
    ];
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: Some(contact.id.get()),
            nome: Some(contact.name),
            contato: Some(contact.phone),
            created_date: Some(contact.created_date),
            profissional: Some(contact.professional_name),
        }
    }
}
