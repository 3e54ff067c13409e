use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::contact::{
    Contact as DomainContact, NewContact as DomainNewContact, UpdateContact as DomainUpdateContact,
};
use crate::domain::types::{ContactId, ProfessionalId, TypeConstraintError};
use crate::models::professional::Professional;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(belongs_to(Professional, foreign_key = professional_id))]
/// Diesel model for [`crate::domain::contact::Contact`].
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub created_date: NaiveDate,
    pub professional_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contacts)]
pub struct NewContact<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub created_date: NaiveDate,
    pub professional_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::contacts)]
pub struct UpdateContact<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
}

/// Builds the domain contact from its row and the owner's name.
impl TryFrom<(Contact, String)> for DomainContact {
    type Error = TypeConstraintError;

    fn try_from((row, professional_name): (Contact, String)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ContactId::new(row.id)?,
            name: row.name,
            phone: row.phone,
            created_date: row.created_date,
            professional_id: ProfessionalId::new(row.professional_id)?,
            professional_name,
        })
    }
}

impl<'a> From<&'a DomainNewContact> for NewContact<'a> {
    fn from(contact: &'a DomainNewContact) -> Self {
        Self {
            name: contact.name.as_str(),
            phone: contact.phone.as_str(),
            created_date: contact.created_date,
            professional_id: contact.professional_id.get(),
        }
    }
}

impl<'a> From<&'a DomainUpdateContact> for UpdateContact<'a> {
    fn from(updates: &'a DomainUpdateContact) -> Self {
        Self {
            name: updates.name.as_deref(),
            phone: updates.phone.as_ref().map(|p| p.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PhoneNumber;

    #[test]
    fn from_domain_new_creates_newcontact() {
        let domain = DomainNewContact::new(
            " Recepção ".to_string(),
            PhoneNumber::new("1133334444").unwrap(),
            ProfessionalId::new(9).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        let insert: NewContact = (&domain).into();

        assert_eq!(insert.name, "Recepção");
        assert_eq!(insert.phone, "1133334444");
        assert_eq!(insert.professional_id, 9);
    }

    #[test]
    fn from_domain_update_keeps_missing_columns_empty() {
        let domain = DomainUpdateContact {
            name: None,
            phone: Some(PhoneNumber::new("11999998888").unwrap()),
        };
        let update: UpdateContact = (&domain).into();

        assert_eq!(update.name, None);
        assert_eq!(update.phone, Some("11999998888"));
    }

    #[test]
    fn joined_row_into_domain() {
        let row = Contact {
            id: 2,
            name: "Casa".to_string(),
            phone: "1122223333".to_string(),
            created_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            professional_id: 5,
        };
        let domain = DomainContact::try_from((row, "Carla".to_string())).unwrap();

        assert_eq!(domain.id.get(), 2);
        assert_eq!(domain.professional_id.get(), 5);
        assert_eq!(domain.professional_name, "Carla");
    }
}
