use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::{ListQuery, MessageResponse, OperationResponse};
use crate::dto::contact::ContactDto;
use crate::forms::contact::{ContactForm, UpdateContactForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::contact as contact_service;

#[utoipa::path(
    get,
    path = "/contato",
    tag = "contato",
    summary = "Lists contacts",
    params(
        ("q" = Option<String>, Query, description = "Free-text search, case-insensitive"),
        ("fields" = Option<Vec<String>>, Query, description = "Fields to return, repeated or comma separated"),
    ),
    responses(
        (status = 200, description = "Matching records", body = [ContactDto]),
        (status = 400, description = "Malformed query string", body = MessageResponse),
    )
)]
#[get("/contato")]
pub async fn list_contacts(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let query = match ListQuery::from_query_string(req.query_string()) {
        Ok(query) => query,
        Err(message) => return HttpResponse::BadRequest().json(MessageResponse::new(message)),
    };

    match contact_service::list_contacts(repo.get_ref(), query.q.as_deref(), &query.field_names())
    {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/contato/{id}",
    tag = "contato",
    summary = "Fetches a contact",
    params(("id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact found", body = ContactDto),
        (status = 404, description = "Contact or its owner not visible", body = MessageResponse),
    )
)]
#[get("/contato/{id}")]
pub async fn show_contact(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match contact_service::get_contact(repo.get_ref(), id.into_inner()) {
        Ok(contact) => HttpResponse::Ok().json(ContactDto::from(contact)),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    post,
    path = "/contato",
    tag = "contato",
    summary = "Creates a contact",
    request_body = ContactForm,
    responses(
        (status = 201, description = "Contact created", body = OperationResponse),
        (status = 400, description = "Invalid input", body = MessageResponse),
        (status = 404, description = "Owning professional not found", body = MessageResponse),
        (status = 409, description = "Phone already registered", body = MessageResponse),
    )
)]
#[post("/contato")]
pub async fn create_contact(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContactForm>,
) -> impl Responder {
    match contact_service::create_contact(repo.get_ref(), form) {
        Ok(created) => HttpResponse::Created().json(OperationResponse {
            id: created.id.get(),
            message: format!("Contato com id {} criado com sucesso.", created.id),
        }),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    put,
    path = "/contato/{id}",
    tag = "contato",
    summary = "Updates the supplied fields of a contact",
    params(("id" = i32, Path, description = "Contact identifier")),
    request_body = UpdateContactForm,
    responses(
        (status = 201, description = "Contact updated", body = OperationResponse),
        (status = 400, description = "Invalid input", body = MessageResponse),
        (status = 404, description = "Contact or its owner not visible", body = MessageResponse),
        (status = 409, description = "Phone already registered", body = MessageResponse),
    )
)]
#[put("/contato/{id}")]
pub async fn update_contact(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateContactForm>,
) -> impl Responder {
    match contact_service::update_contact(repo.get_ref(), id.into_inner(), form) {
        Ok(updated) => HttpResponse::Created().json(OperationResponse {
            id: updated.id.get(),
            message: format!("Contato com id {} atualizado com sucesso.", updated.id),
        }),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    delete,
    path = "/contato/{id}",
    tag = "contato",
    summary = "Deletes a contact",
    params(("id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 204, description = "Done"),
        (status = 404, description = "Contact or its owner not visible", body = MessageResponse),
    )
)]
#[delete("/contato/{id}")]
pub async fn delete_contact(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match contact_service::delete_contact(repo.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
