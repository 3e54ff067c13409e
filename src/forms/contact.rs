use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::contact::UpdateContact;
use crate::domain::types::{PhoneNumber, TypeConstraintError};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
/// Body of `POST /contato`.
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub nome: String,
    /// Phone number, 10 or 11 digits.
    #[schema(example = "11987654321")]
    pub contato: String,
    /// Identifier of the owning professional.
    pub profissional: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
/// Body of `PUT /contato/{id}`; absent fields are left unchanged.
pub struct UpdateContactForm {
    #[validate(length(max = 255))]
    pub nome: Option<String>,
    pub contato: Option<String>,
}

impl TryFrom<UpdateContactForm> for UpdateContact {
    type Error = TypeConstraintError;

    fn try_from(form: UpdateContactForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form.nome.map(|name| name.trim().to_string()),
            phone: form.contato.map(PhoneNumber::new).transpose()?,
        })
    }
}
