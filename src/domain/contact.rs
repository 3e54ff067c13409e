use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactId, PhoneNumber, ProfessionalId};

/// Phone number owned by a professional.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    /// Free-text label naming who answers the phone.
    pub name: String,
    pub phone: String,
    pub created_date: NaiveDate,
    pub professional_id: ProfessionalId,
    /// Name of the owning professional, loaded through the join.
    pub professional_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub phone: PhoneNumber,
    pub professional_id: ProfessionalId,
    pub created_date: NaiveDate,
}

impl NewContact {
    #[must_use]
    pub fn new(
        name: String,
        phone: PhoneNumber,
        professional_id: ProfessionalId,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            phone,
            professional_id,
            created_date,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateContact {
    pub name: Option<String>,
    pub phone: Option<PhoneNumber>,
}

impl UpdateContact {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}
