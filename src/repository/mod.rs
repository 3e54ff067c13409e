use diesel::sql_types::{Date, Text};

use crate::{
    db::{DbConnection, DbPool},
    domain::{
        contact::{Contact, NewContact, UpdateContact},
        professional::{NewProfessional, Professional, UpdateProfessional},
        types::{ContactId, PhoneNumber, ProfessionalId},
    },
    repository::errors::RepositoryResult,
};

pub mod contact;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod professional;

diesel::define_sql_function! {
    /// SQLite `strftime`, used to render date columns as `YYYY-MM-DD` text.
    fn strftime(format: Text, date: Date) -> Text;
}

/// `strftime` format matching the canonical ISO date rendering.
pub(crate) const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Free-text filter shared by the professional and contact searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term. Blank terms are dropped so the query lists
    /// everything instead of matching an empty pattern.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    /// Lowercased `LIKE` pattern for the search term, if any. Text columns
    /// are compared through `unicode_lower` so accented capitals match too.
    pub(crate) fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|term| {
            let escaped = term
                .to_lowercase()
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{escaped}%")
        })
    }
}

pub trait ProfessionalReader {
    /// Returns the professional only while it is active.
    fn get_visible_professional_by_id(
        &self,
        id: ProfessionalId,
    ) -> RepositoryResult<Option<Professional>>;
    /// Active professionals whose name, role, or dates contain the search term,
    /// ignoring case.
    fn search_professionals(&self, query: &SearchQuery) -> RepositoryResult<Vec<Professional>>;
}

pub trait ProfessionalWriter {
    fn create_professional(&self, new_professional: &NewProfessional)
    -> RepositoryResult<Professional>;
    fn update_professional(
        &self,
        id: ProfessionalId,
        updates: &UpdateProfessional,
    ) -> RepositoryResult<Professional>;
    /// Soft delete. Fails with `NotFound` unless the professional is active.
    fn deactivate_professional(&self, id: ProfessionalId) -> RepositoryResult<()>;
}

pub trait ContactReader {
    /// Returns the contact only while its owner is active.
    fn get_visible_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
    /// Contacts whose name, phone, creation date, or owner name contain the
    /// search term.
    fn search_contacts(&self, query: &SearchQuery) -> RepositoryResult<Vec<Contact>>;
    /// Checks every contact, including those of inactive professionals.
    fn contact_phone_exists(&self, phone: &PhoneNumber) -> RepositoryResult<bool>;
}

pub trait ContactWriter {
    /// Inserts the contact. Fails with `NotFound` when the owner is missing or
    /// inactive at insert time.
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
    fn update_contact(&self, id: ContactId, updates: &UpdateContact) -> RepositoryResult<Contact>;
    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
