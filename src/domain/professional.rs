use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PersonName, ProfessionalId, Role};

/// Staff member record. Only active professionals are visible by id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    pub active: bool,
    pub role: Role,
    pub birth_date: NaiveDate,
    pub created_date: NaiveDate,
}

/// Data required to insert a professional.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProfessional {
    pub name: PersonName,
    pub role: Role,
    pub birth_date: NaiveDate,
    pub created_date: NaiveDate,
}

impl NewProfessional {
    /// New professionals always start active; `created_date` is the day of
    /// registration.
    #[must_use]
    pub fn new(name: PersonName, role: Role, birth_date: NaiveDate, created_date: NaiveDate) -> Self {
        Self {
            name,
            role,
            birth_date,
            created_date,
        }
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateProfessional {
    pub name: Option<PersonName>,
    pub role: Option<Role>,
    pub birth_date: Option<NaiveDate>,
}

impl UpdateProfessional {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.birth_date.is_none()
    }
}
