//! Repository implementation for contacts.
//!
//! A contact is only reachable by id while its owning professional is
//! active, so every by-id query joins `professionals` and checks the flag.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    db::unicode_lower,
    domain::{
        contact::{Contact, NewContact, UpdateContact},
        types::{ContactId, PhoneNumber},
    },
    models::contact::{
        Contact as DbContact, NewContact as DbNewContact, UpdateContact as DbUpdateContact,
    },
    repository::{
        ContactReader, ContactWriter, DieselRepository, ISO_DATE_FORMAT, SearchQuery,
        errors::{RepositoryError, RepositoryResult},
        strftime,
    },
};

fn into_domain(row: (DbContact, String)) -> RepositoryResult<Contact> {
    Contact::try_from(row).map_err(RepositoryError::from)
}

/// Loads the contact together with its owner's name when the owner is active.
fn load_visible(
    conn: &mut SqliteConnection,
    id: ContactId,
) -> RepositoryResult<Option<(DbContact, String)>> {
    use crate::schema::{contacts, professionals};

    let row = contacts::table
        .inner_join(professionals::table)
        .filter(contacts::id.eq(id.get()))
        .filter(professionals::active.eq(true))
        .select((contacts::all_columns, professionals::name))
        .first::<(DbContact, String)>(conn)
        .optional()?;

    Ok(row)
}

impl ContactReader for DieselRepository {
    fn get_visible_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>> {
        let mut conn = self.conn()?;
        load_visible(&mut conn, id)?.map(into_domain).transpose()
    }

    fn search_contacts(&self, query: &SearchQuery) -> RepositoryResult<Vec<Contact>> {
        use crate::schema::{contacts, professionals};

        let mut conn = self.conn()?;

        let mut items = contacts::table
            .inner_join(professionals::table)
            .select((contacts::all_columns, professionals::name))
            .order(contacts::id.asc())
            .into_boxed();

        if let Some(pattern) = query.like_pattern() {
            items = items.filter(
                unicode_lower(contacts::name)
                    .like(pattern.clone())
                    .escape('\\')
                    .or(contacts::phone.like(pattern.clone()).escape('\\'))
                    .or(strftime(ISO_DATE_FORMAT, contacts::created_date)
                        .like(pattern.clone())
                        .escape('\\'))
                    .or(unicode_lower(professionals::name)
                        .like(pattern)
                        .escape('\\')),
            );
        }

        items
            .load::<(DbContact, String)>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect()
    }

    fn contact_phone_exists(&self, phone: &PhoneNumber) -> RepositoryResult<bool> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let exists = diesel::select(diesel::dsl::exists(
            contacts::table.filter(contacts::phone.eq(phone.as_str())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(exists)
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::schema::{contacts, professionals};

        let mut conn = self.conn()?;
        let insertable: DbNewContact = new_contact.into();

        // The owner check and the insert share one write lock so a
        // concurrent deactivation cannot slip in between.
        conn.immediate_transaction(|conn| -> RepositoryResult<Contact> {
            let owner_name = professionals::table
                .find(new_contact.professional_id.get())
                .filter(professionals::active.eq(true))
                .select(professionals::name)
                .first::<String>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let created = diesel::insert_into(contacts::table)
                .values(&insertable)
                .get_result::<DbContact>(conn)?;

            into_domain((created, owner_name))
        })
    }

    fn update_contact(&self, id: ContactId, updates: &UpdateContact) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let changeset: DbUpdateContact = updates.into();

        conn.immediate_transaction(|conn| -> RepositoryResult<Contact> {
            let (current, owner_name) = load_visible(conn, id)?.ok_or(RepositoryError::NotFound)?;

            if updates.is_empty() {
                return into_domain((current, owner_name));
            }

            let updated = diesel::update(contacts::table.find(id.get()))
                .set(&changeset)
                .get_result::<DbContact>(conn)?;

            into_domain((updated, owner_name))
        })
    }

    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        conn.immediate_transaction(|conn| -> RepositoryResult<()> {
            if load_visible(conn, id)?.is_none() {
                return Err(RepositoryError::NotFound);
            }
            diesel::delete(contacts::table.find(id.get())).execute(conn)?;
            Ok(())
        })
    }
}
