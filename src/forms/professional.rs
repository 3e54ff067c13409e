use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::professional::{NewProfessional, UpdateProfessional};
use crate::domain::types::{PersonName, Role, TypeConstraintError};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /profissional`.
pub struct ProfessionalForm {
    #[validate(length(max = 255))]
    pub nome: String,
    /// Role name, matched case-insensitively.
    #[schema(example = "Desenvolvedor")]
    pub cargo: String,
    pub data_nascimento: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /profissional/{id}`; absent fields are left unchanged.
pub struct UpdateProfessionalForm {
    #[validate(length(max = 255))]
    pub nome: Option<String>,
    pub cargo: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
}

impl ProfessionalForm {
    /// Converts the form into a professional registered on `today`.
    pub fn into_new_professional(
        self,
        today: NaiveDate,
    ) -> Result<NewProfessional, TypeConstraintError> {
        let role = Role::parse(&self.cargo)?;
        let name = PersonName::new(&self.nome)?;
        Ok(NewProfessional::new(name, role, self.data_nascimento, today))
    }
}

impl TryFrom<UpdateProfessionalForm> for UpdateProfessional {
    type Error = TypeConstraintError;

    fn try_from(form: UpdateProfessionalForm) -> Result<Self, Self::Error> {
        Ok(Self {
            role: form.cargo.as_deref().map(Role::parse).transpose()?,
            name: form.nome.map(PersonName::new).transpose()?,
            birth_date: form.data_nascimento,
        })
    }
}
