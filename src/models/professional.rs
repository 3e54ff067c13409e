use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::professional::{
    NewProfessional as DomainNewProfessional, Professional as DomainProfessional,
    UpdateProfessional as DomainUpdateProfessional,
};
use crate::domain::types::{ProfessionalId, Role, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::professionals)]
/// Diesel model for [`crate::domain::professional::Professional`].
pub struct Professional {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub role: String,
    pub birth_date: NaiveDate,
    pub created_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::professionals)]
/// Insertable form of [`Professional`].
pub struct NewProfessional<'a> {
    pub name: &'a str,
    pub active: bool,
    pub role: &'a str,
    pub birth_date: NaiveDate,
    pub created_date: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::professionals)]
/// Changeset for [`Professional`]; `None` columns are left untouched.
pub struct UpdateProfessional<'a> {
    pub name: Option<&'a str>,
    pub role: Option<&'a str>,
    pub birth_date: Option<NaiveDate>,
}

impl TryFrom<Professional> for DomainProfessional {
    type Error = TypeConstraintError;

    fn try_from(row: Professional) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProfessionalId::new(row.id)?,
            name: row.name,
            active: row.active,
            role: Role::parse(&row.role)?,
            birth_date: row.birth_date,
            created_date: row.created_date,
        })
    }
}

impl<'a> From<&'a DomainNewProfessional> for NewProfessional<'a> {
    fn from(professional: &'a DomainNewProfessional) -> Self {
        Self {
            name: professional.name.as_str(),
            active: true,
            role: professional.role.as_str(),
            birth_date: professional.birth_date,
            created_date: professional.created_date,
        }
    }
}

impl<'a> From<&'a DomainUpdateProfessional> for UpdateProfessional<'a> {
    fn from(updates: &'a DomainUpdateProfessional) -> Self {
        Self {
            name: updates.name.as_ref().map(|n| n.as_str()),
            role: updates.role.map(Role::as_str),
            birth_date: updates.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PersonName;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_professional_is_inserted_active_with_stored_role() {
        let domain = DomainNewProfessional::new(
            PersonName::new("Ana").unwrap(),
            Role::Suporte,
            date(1990, 5, 17),
            date(2024, 1, 2),
        );
        let insert: NewProfessional = (&domain).into();

        assert!(insert.active);
        assert_eq!(insert.name, "Ana");
        assert_eq!(insert.role, "SUPORTE");
        assert_eq!(insert.birth_date, date(1990, 5, 17));
    }

    #[test]
    fn update_only_carries_supplied_columns() {
        let domain = DomainUpdateProfessional {
            role: Some(Role::Tester),
            ..Default::default()
        };
        let update: UpdateProfessional = (&domain).into();

        assert_eq!(update.name, None);
        assert_eq!(update.role, Some("TESTER"));
        assert_eq!(update.birth_date, None);
    }

    #[test]
    fn row_into_domain() {
        let row = Professional {
            id: 4,
            name: "Bruno".to_string(),
            active: false,
            role: "DESIGNER".to_string(),
            birth_date: date(1985, 12, 1),
            created_date: date(2023, 3, 4),
        };
        let domain = DomainProfessional::try_from(row).unwrap();

        assert_eq!(domain.id.get(), 4);
        assert!(!domain.active);
        assert_eq!(domain.role, Role::Designer);
    }

    #[test]
    fn row_with_unknown_role_is_rejected() {
        let row = Professional {
            id: 1,
            name: "X".to_string(),
            active: true,
            role: "PILOTO".to_string(),
            birth_date: date(2000, 1, 1),
            created_date: date(2024, 1, 1),
        };

        assert!(DomainProfessional::try_from(row).is_err());
    }
}
