use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::{ListQuery, MessageResponse, OperationResponse};
use crate::dto::professional::ProfessionalDto;
use crate::forms::professional::{ProfessionalForm, UpdateProfessionalForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::professional as professional_service;

#[utoipa::path(
    get,
    path = "/profissional",
    tag = "profissional",
    summary = "Lists active professionals",
    params(
        ("q" = Option<String>, Query, description = "Free-text search, case-insensitive"),
        ("fields" = Option<Vec<String>>, Query, description = "Fields to return, repeated or comma separated"),
    ),
    responses(
        (status = 200, description = "Matching records", body = [ProfessionalDto]),
        (status = 400, description = "Malformed query string", body = MessageResponse),
    )
)]
#[get("/profissional")]
pub async fn list_professionals(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = match ListQuery::from_query_string(req.query_string()) {
        Ok(query) => query,
        Err(message) => return HttpResponse::BadRequest().json(MessageResponse::new(message)),
    };

    match professional_service::list_professionals(
        repo.get_ref(),
        query.q.as_deref(),
        &query.field_names(),
    ) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/profissional/{id}",
    tag = "profissional",
    summary = "Fetches an active professional",
    params(("id" = i32, Path, description = "Professional identifier")),
    responses(
        (status = 200, description = "Professional found", body = ProfessionalDto),
        (status = 404, description = "Professional not found", body = MessageResponse),
    )
)]
#[get("/profissional/{id}")]
pub async fn show_professional(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match professional_service::get_professional(repo.get_ref(), id.into_inner()) {
        Ok(professional) => HttpResponse::Ok().json(ProfessionalDto::from(professional)),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    post,
    path = "/profissional",
    tag = "profissional",
    summary = "Registers a professional",
    request_body = ProfessionalForm,
    responses(
        (status = 201, description = "Professional created", body = OperationResponse),
        (status = 400, description = "Invalid input", body = MessageResponse),
    )
)]
#[post("/profissional")]
pub async fn create_professional(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProfessionalForm>,
) -> impl Responder {
    match professional_service::create_professional(repo.get_ref(), form) {
        Ok(created) => HttpResponse::Created().json(OperationResponse {
            id: created.id.get(),
            message: format!("Profissional com id {} criado com sucesso.", created.id),
        }),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    put,
    path = "/profissional/{id}",
    tag = "profissional",
    summary = "Updates the supplied fields of a professional",
    params(("id" = i32, Path, description = "Professional identifier")),
    request_body = UpdateProfessionalForm,
    responses(
        (status = 201, description = "Professional updated", body = OperationResponse),
        (status = 400, description = "Invalid input", body = MessageResponse),
        (status = 404, description = "Professional not found", body = MessageResponse),
    )
)]
#[put("/profissional/{id}")]
pub async fn update_professional(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateProfessionalForm>,
) -> impl Responder {
    match professional_service::update_professional(repo.get_ref(), id.into_inner(), form) {
        Ok(updated) => HttpResponse::Created().json(OperationResponse {
            id: updated.id.get(),
            message: format!("Profissional com id {} atualizado com sucesso.", updated.id),
        }),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    delete,
    path = "/profissional/{id}",
    tag = "profissional",
    summary = "Deactivates a professional",
    params(("id" = i32, Path, description = "Professional identifier")),
    responses(
        (status = 204, description = "Done"),
        (status = 404, description = "Professional not found", body = MessageResponse),
    )
)]
#[delete("/profissional/{id}")]
pub async fn deactivate_professional(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match professional_service::deactivate_professional(repo.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
