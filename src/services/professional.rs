//! Professional workflows: listing, lookup, registration and soft deletion.

use validator::Validate;

use crate::domain::professional::{Professional, UpdateProfessional};
use crate::domain::types::ProfessionalId;
use crate::dto::professional::ProfessionalDto;
use crate::dto::projection::project;
use crate::forms::professional::{ProfessionalForm, UpdateProfessionalForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{ProfessionalReader, ProfessionalWriter, SearchQuery};
use crate::services::{ServiceError, ServiceResult, today};

fn professional_id(raw: i32) -> ServiceResult<ProfessionalId> {
    ProfessionalId::new(raw).map_err(|_| ServiceError::ProfessionalNotFound)
}

fn not_found_as_professional(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::ProfessionalNotFound,
        other => other.into(),
    }
}

/// Active professionals matching `q`, projected onto `fields`.
pub fn list_professionals<R>(
    repo: &R,
    q: Option<&str>,
    fields: &[String],
) -> ServiceResult<Vec<ProfessionalDto>>
where
    R: ProfessionalReader + ?Sized,
{
    let query = match q {
        Some(term) => SearchQuery::new().search(term),
        None => SearchQuery::new(),
    };

    let professionals = repo.search_professionals(&query).map_err(|err| {
        log::error!("Failed to search professionals: {err}");
        err
    })?;

    let dtos = professionals.into_iter().map(ProfessionalDto::from).collect();
    Ok(project(dtos, fields))
}

/// Loads a visible professional.
pub fn get_professional<R>(repo: &R, id: i32) -> ServiceResult<Professional>
where
    R: ProfessionalReader + ?Sized,
{
    let id = professional_id(id)?;
    repo.get_visible_professional_by_id(id)?
        .ok_or(ServiceError::ProfessionalNotFound)
}

/// Registers a professional dated today.
pub fn create_professional<R>(repo: &R, form: ProfessionalForm) -> ServiceResult<Professional>
where
    R: ProfessionalWriter + ?Sized,
{
    form.validate()?;
    let new_professional = form.into_new_professional(today())?;

    let created = repo.create_professional(&new_professional).map_err(|err| {
        log::error!("Failed to create professional: {err}");
        err
    })?;

    log::info!("Professional {} created", created.id);
    Ok(created)
}

/// Applies the supplied fields to a visible professional.
pub fn update_professional<R>(
    repo: &R,
    id: i32,
    form: UpdateProfessionalForm,
) -> ServiceResult<Professional>
where
    R: ProfessionalReader + ProfessionalWriter + ?Sized,
{
    let current = get_professional(repo, id)?;

    form.validate()?;
    let updates = UpdateProfessional::try_from(form)?;
    if updates.is_empty() {
        return Ok(current);
    }

    repo.update_professional(current.id, &updates)
        .map_err(not_found_as_professional)
}

/// Soft deletes a professional. Their contacts stay stored but stop being
/// visible.
pub fn deactivate_professional<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProfessionalWriter + ?Sized,
{
    let id = professional_id(id)?;

    repo.deactivate_professional(id)
        .map_err(not_found_as_professional)?;

    log::info!("Professional {id} deactivated");
    Ok(())
}
