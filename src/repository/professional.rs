//! Repository implementation for professionals.

use diesel::prelude::*;

use crate::{
    db::unicode_lower,
    domain::{
        professional::{NewProfessional, Professional, UpdateProfessional},
        types::ProfessionalId,
    },
    models::professional::{
        NewProfessional as DbNewProfessional, Professional as DbProfessional,
        UpdateProfessional as DbUpdateProfessional,
    },
    repository::{
        DieselRepository, ISO_DATE_FORMAT, ProfessionalReader, ProfessionalWriter, SearchQuery,
        errors::{RepositoryError, RepositoryResult},
        strftime,
    },
};

fn into_domain(row: DbProfessional) -> RepositoryResult<Professional> {
    Professional::try_from(row).map_err(RepositoryError::from)
}

impl ProfessionalReader for DieselRepository {
    fn get_visible_professional_by_id(
        &self,
        id: ProfessionalId,
    ) -> RepositoryResult<Option<Professional>> {
        use crate::schema::professionals;

        let mut conn = self.conn()?;
        let professional = professionals::table
            .find(id.get())
            .filter(professionals::active.eq(true))
            .first::<DbProfessional>(&mut conn)
            .optional()?;

        professional.map(into_domain).transpose()
    }

    fn search_professionals(&self, query: &SearchQuery) -> RepositoryResult<Vec<Professional>> {
        use crate::schema::professionals;

        let mut conn = self.conn()?;

        // (q IS NULL OR <matches>) AND active = true
        let mut items = professionals::table
            .filter(professionals::active.eq(true))
            .order(professionals::id.asc())
            .into_boxed();

        if let Some(pattern) = query.like_pattern() {
            items = items.filter(
                unicode_lower(professionals::name)
                    .like(pattern.clone())
                    .escape('\\')
                    .or(unicode_lower(professionals::role)
                        .like(pattern.clone())
                        .escape('\\'))
                    .or(strftime(ISO_DATE_FORMAT, professionals::birth_date)
                        .like(pattern.clone())
                        .escape('\\'))
                    .or(strftime(ISO_DATE_FORMAT, professionals::created_date)
                        .like(pattern)
                        .escape('\\')),
            );
        }

        items
            .load::<DbProfessional>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect()
    }
}

impl ProfessionalWriter for DieselRepository {
    fn create_professional(
        &self,
        new_professional: &NewProfessional,
    ) -> RepositoryResult<Professional> {
        use crate::schema::professionals;

        let mut conn = self.conn()?;
        let insertable: DbNewProfessional = new_professional.into();

        let created = diesel::insert_into(professionals::table)
            .values(&insertable)
            .get_result::<DbProfessional>(&mut conn)?;

        into_domain(created)
    }

    fn update_professional(
        &self,
        id: ProfessionalId,
        updates: &UpdateProfessional,
    ) -> RepositoryResult<Professional> {
        use crate::schema::professionals;

        if updates.is_empty() {
            return self
                .get_visible_professional_by_id(id)?
                .ok_or(RepositoryError::NotFound);
        }

        let mut conn = self.conn()?;
        let changeset: DbUpdateProfessional = updates.into();

        let updated = diesel::update(
            professionals::table
                .find(id.get())
                .filter(professionals::active.eq(true)),
        )
        .set(&changeset)
        .get_result::<DbProfessional>(&mut conn)?;

        into_domain(updated)
    }

    fn deactivate_professional(&self, id: ProfessionalId) -> RepositoryResult<()> {
        use crate::schema::professionals;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            professionals::table
                .find(id.get())
                .filter(professionals::active.eq(true)),
        )
        .set(professionals::active.eq(false))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
