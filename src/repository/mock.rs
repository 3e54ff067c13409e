//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::domain::professional::{NewProfessional, Professional, UpdateProfessional};
use crate::domain::types::{ContactId, PhoneNumber, ProfessionalId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ContactReader, ContactWriter, ProfessionalReader, ProfessionalWriter, SearchQuery,
};

mock! {
    pub Repository {}

    impl ProfessionalReader for Repository {
        fn get_visible_professional_by_id(
            &self,
            id: ProfessionalId,
        ) -> RepositoryResult<Option<Professional>>;
        fn search_professionals(&self, query: &SearchQuery) -> RepositoryResult<Vec<Professional>>;
    }

    impl ProfessionalWriter for Repository {
        fn create_professional(
            &self,
            new_professional: &NewProfessional,
        ) -> RepositoryResult<Professional>;
        fn update_professional(
            &self,
            id: ProfessionalId,
            updates: &UpdateProfessional,
        ) -> RepositoryResult<Professional>;
        fn deactivate_professional(&self, id: ProfessionalId) -> RepositoryResult<()>;
    }

    impl ContactReader for Repository {
        fn get_visible_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
        fn search_contacts(&self, query: &SearchQuery) -> RepositoryResult<Vec<Contact>>;
        fn contact_phone_exists(&self, phone: &PhoneNumber) -> RepositoryResult<bool>;
    }

    impl ContactWriter for Repository {
        fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
        fn update_contact(
            &self,
            id: ContactId,
            updates: &UpdateContact,
        ) -> RepositoryResult<Contact>;
        fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
    }
}
