//! Contact workflows. Every operation first resolves the contact (or, on
//! creation, its owner) through the visibility rules, then validates the
//! phone, then checks it is not already registered.

use validator::Validate;

use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::domain::types::{ContactId, PhoneNumber, ProfessionalId};
use crate::dto::contact::ContactDto;
use crate::dto::projection::project;
use crate::forms::contact::{ContactForm, UpdateContactForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{ContactReader, ContactWriter, ProfessionalReader, SearchQuery};
use crate::services::{ServiceError, ServiceResult, today};

fn contact_id(raw: i32) -> ServiceResult<ContactId> {
    ContactId::new(raw).map_err(|_| ServiceError::ContactNotFound)
}

fn write_error(err: RepositoryError, not_found: ServiceError) -> ServiceError {
    match err {
        RepositoryError::NotFound => not_found,
        err if err.is_unique_violation() => ServiceError::DuplicatePhone,
        err => {
            log::error!("Failed to write contact: {err}");
            err.into()
        }
    }
}

/// Contacts matching `q`, projected onto `fields`.
pub fn list_contacts<R>(
    repo: &R,
    q: Option<&str>,
    fields: &[String],
) -> ServiceResult<Vec<ContactDto>>
where
    R: ContactReader + ?Sized,
{
    let query = match q {
        Some(term) => SearchQuery::new().search(term),
        None => SearchQuery::new(),
    };

    let contacts = repo.search_contacts(&query).map_err(|err| {
        log::error!("Failed to search contacts: {err}");
        err
    })?;

    let dtos = contacts.into_iter().map(ContactDto::from).collect();
    Ok(project(dtos, fields))
}

/// Loads a contact whose owner is active.
pub fn get_contact<R>(repo: &R, id: i32) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    let id = contact_id(id)?;
    repo.get_visible_contact_by_id(id)?
        .ok_or(ServiceError::ContactNotFound)
}

pub fn create_contact<R>(repo: &R, form: ContactForm) -> ServiceResult<Contact>
where
    R: ProfessionalReader + ContactReader + ContactWriter + ?Sized,
{
    let owner_id =
        ProfessionalId::new(form.profissional).map_err(|_| ServiceError::ProfessionalNotFound)?;
    if repo.get_visible_professional_by_id(owner_id)?.is_none() {
        return Err(ServiceError::ProfessionalNotFound);
    }

    form.validate()?;
    let phone = PhoneNumber::new(&form.contato)?;
    if repo.contact_phone_exists(&phone)? {
        return Err(ServiceError::DuplicatePhone);
    }

    let new_contact = NewContact::new(form.nome, phone, owner_id, today());
    let created = repo
        .create_contact(&new_contact)
        .map_err(|err| write_error(err, ServiceError::ProfessionalNotFound))?;

    log::info!("Contact {} created for professional {owner_id}", created.id);
    Ok(created)
}

pub fn update_contact<R>(repo: &R, id: i32, form: UpdateContactForm) -> ServiceResult<Contact>
where
    R: ContactReader + ContactWriter + ?Sized,
{
    let current = get_contact(repo, id)?;

    form.validate()?;
    let updates = UpdateContact::try_from(form)?;
    if updates.is_empty() {
        return Ok(current);
    }

    if let Some(phone) = &updates.phone {
        if phone.as_str() != current.phone && repo.contact_phone_exists(phone)? {
            return Err(ServiceError::DuplicatePhone);
        }
    }

    repo.update_contact(current.id, &updates)
        .map_err(|err| write_error(err, ServiceError::ContactNotFound))
}

/// Permanently removes a visible contact.
pub fn delete_contact<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    let id = contact_id(id)?;

    repo.delete_contact(id)
        .map_err(|err| write_error(err, ServiceError::ContactNotFound))?;

    log::info!("Contact {id} deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::professional::Professional;
    use crate::domain::types::Role;
    use crate::repository::mock::MockRepository;

    fn owner(id: i32) -> Professional {
        Professional {
            id: ProfessionalId::new(id).unwrap(),
            name: "Ana".to_string(),
            active: true,
            role: Role::Tester,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            created_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn contact(id: i32, phone: &str) -> Contact {
        Contact {
            id: ContactId::new(id).unwrap(),
            name: "Casa".to_string(),
            phone: phone.to_string(),
            created_date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            professional_id: ProfessionalId::new(1).unwrap(),
            professional_name: "Ana".to_string(),
        }
    }

    fn form(phone: &str, owner: i32) -> ContactForm {
        ContactForm {
            nome: "Casa".to_string(),
            contato: phone.to_string(),
            profissional: owner,
        }
    }

    #[test]
    fn list_projects_requested_fields() {
        let mut repo = MockRepository::new();
        repo.expect_search_contacts()
            .withf(|query| query.search.as_deref() == Some("Ana"))
            .times(1)
            .returning(|_| Ok(vec![contact(1, "1134567890")]));

        let fields = vec!["contato".to_string(), "profissional".to_string()];
        let items = list_contacts(&repo, Some("Ana"), &fields).unwrap();

        assert_eq!(items[0].contato.as_deref(), Some("1134567890"));
        assert_eq!(items[0].profissional.as_deref(), Some("Ana"));
        assert_eq!(items[0].nome, None);
    }

    #[test]
    fn create_for_missing_owner_fails_first() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_professional_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_contact_phone_exists().never();
        repo.expect_create_contact().never();

        assert_eq!(
            create_contact(&repo, form("abc", 8)),
            Err(ServiceError::ProfessionalNotFound)
        );
    }

    #[test]
    fn create_rejects_invalid_phone_before_uniqueness() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_professional_by_id()
            .returning(|_| Ok(Some(owner(1))));
        repo.expect_contact_phone_exists().never();
        repo.expect_create_contact().never();

        assert_eq!(
            create_contact(&repo, form("12345abcde", 1)),
            Err(ServiceError::InvalidPhone)
        );
    }

    #[test]
    fn create_rejects_registered_phone() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_professional_by_id()
            .returning(|_| Ok(Some(owner(1))));
        repo.expect_contact_phone_exists()
            .withf(|phone| phone.as_str() == "1134567890")
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_create_contact().never();

        assert_eq!(
            create_contact(&repo, form(" 1134567890 ", 1)),
            Err(ServiceError::DuplicatePhone)
        );
    }

    #[test]
    fn create_maps_unique_violation_to_duplicate() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_professional_by_id()
            .returning(|_| Ok(Some(owner(1))));
        repo.expect_contact_phone_exists().returning(|_| Ok(false));
        repo.expect_create_contact().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "Unique constraint violation: UNIQUE constraint failed: contacts.phone".into(),
            ))
        });

        assert_eq!(
            create_contact(&repo, form("1134567890", 1)),
            Err(ServiceError::DuplicatePhone)
        );
    }

    #[test]
    fn create_maps_owner_vanishing_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_professional_by_id()
            .returning(|_| Ok(Some(owner(1))));
        repo.expect_contact_phone_exists().returning(|_| Ok(false));
        repo.expect_create_contact()
            .returning(|_| Err(RepositoryError::NotFound));

        assert_eq!(
            create_contact(&repo, form("1134567890", 1)),
            Err(ServiceError::ProfessionalNotFound)
        );
    }

    #[test]
    fn create_stores_trimmed_values() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_professional_by_id()
            .returning(|_| Ok(Some(owner(1))));
        repo.expect_contact_phone_exists().returning(|_| Ok(false));
        repo.expect_create_contact()
            .withf(|new| {
                new.name == "Casa"
                    && new.phone.as_str() == "11934567890"
                    && new.professional_id.get() == 1
                    && new.created_date == today()
            })
            .times(1)
            .returning(|_| Ok(contact(4, "11934567890")));

        let mut input = form("11934567890", 1);
        input.nome = "  Casa ".to_string();

        let created = create_contact(&repo, input).unwrap();
        assert_eq!(created.id.get(), 4);
    }

    #[test]
    fn update_of_invisible_contact_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_contact_by_id()
            .returning(|_| Ok(None));
        repo.expect_update_contact().never();

        let form = UpdateContactForm {
            nome: None,
            contato: Some("bad".to_string()),
        };

        assert_eq!(
            update_contact(&repo, 2, form),
            Err(ServiceError::ContactNotFound)
        );
    }

    #[test]
    fn update_keeping_own_phone_skips_duplicate_check() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_contact_by_id()
            .returning(|_| Ok(Some(contact(2, "1134567890"))));
        repo.expect_contact_phone_exists().never();
        repo.expect_update_contact()
            .times(1)
            .returning(|_, _| Ok(contact(2, "1134567890")));

        let form = UpdateContactForm {
            nome: Some("Trabalho".to_string()),
            contato: Some("1134567890".to_string()),
        };

        assert!(update_contact(&repo, 2, form).is_ok());
    }

    #[test]
    fn update_to_taken_phone_is_duplicate() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_contact_by_id()
            .returning(|_| Ok(Some(contact(2, "1134567890"))));
        repo.expect_contact_phone_exists().returning(|_| Ok(true));
        repo.expect_update_contact().never();

        let form = UpdateContactForm {
            nome: None,
            contato: Some("2134567890".to_string()),
        };

        assert_eq!(
            update_contact(&repo, 2, form),
            Err(ServiceError::DuplicatePhone)
        );
    }

    #[test]
    fn empty_update_returns_current_contact() {
        let mut repo = MockRepository::new();
        repo.expect_get_visible_contact_by_id()
            .returning(|_| Ok(Some(contact(2, "1134567890"))));
        repo.expect_update_contact().never();

        let current = update_contact(&repo, 2, UpdateContactForm::default()).unwrap();
        assert_eq!(current, contact(2, "1134567890"));
    }

    #[test]
    fn delete_missing_contact_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_contact()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        assert_eq!(delete_contact(&repo, 6), Err(ServiceError::ContactNotFound));
    }

    #[test]
    fn delete_with_bad_id_never_hits_repository() {
        let mut repo = MockRepository::new();
        repo.expect_delete_contact().never();

        assert_eq!(delete_contact(&repo, 0), Err(ServiceError::ContactNotFound));
    }
}
