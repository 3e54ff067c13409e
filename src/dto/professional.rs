//! JSON representation of a professional.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::professional::Professional;
use crate::dto::display_date;
use crate::dto::projection::{FieldCopier, SparseFields};

/// Every field is optional so the DTO can also carry a sparse projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    /// Display label of the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "display_date::serialize"
    )]
    #[schema(value_type = Option<String>, example = "17/05/1990")]
    pub data_nascimento: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "display_date::serialize"
    )]
    #[schema(value_type = Option<String>, example = "17/05/1990")]
    pub created_date: Option<NaiveDate>,
}

impl SparseFields for ProfessionalDto {
    const FIELDS: &'static [FieldCopier<Self>] = &[
        ("id", |src, dst| dst.id = src.id),
        ("nome", |src, dst| dst.nome.clone_from(&src.nome)),
        ("cargo", |src, dst| dst.cargo.clone_from(&src.cargo)),
        ("dataNascimento", |src, dst| {
            dst.data_nascimento = src.data_nascimento
        }),
        ("createdDate", |src, dst| dst.created_date = src.created_date),
    ];
}

impl From<Professional> for ProfessionalDto {
    fn from(professional: Professional) -> Self {
        Self {
            id: Some(professional.id.get()),
            nome: Some(professional.name),
            cargo: Some(professional.role.label().to_string()),
            data_nascimento: Some(professional.birth_date),
            created_date: Some(professional.created_date),
        }
    }
}
