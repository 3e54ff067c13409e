//! JSON endpoints.

use actix_web::{HttpResponse, Responder, error, get, web};
use serde::Serialize;

use crate::dto::api::MessageResponse;
use crate::services::ServiceError;

pub mod contact;
pub mod openapi;
pub mod professional;

/// Registers every endpoint together with the JSON body settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health)
        .service(openapi::openapi_json)
        .service(professional::list_professionals)
        .service(professional::create_professional)
        .service(professional::show_professional)
        .service(professional::update_professional)
        .service(professional::deactivate_professional)
        .service(contact::list_contacts)
        .service(contact::create_contact)
        .service(contact::show_contact)
        .service(contact::update_contact)
        .service(contact::delete_contact);
}

/// Malformed bodies are answered with the same `{"message"}` shape as every
/// other error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(MessageResponse::new(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

/// Translates a service failure into its HTTP status and JSON body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::ProfessionalNotFound | ServiceError::ContactNotFound => {
            HttpResponse::NotFound().json(MessageResponse::new(err.to_string()))
        }
        ServiceError::InvalidPhone | ServiceError::InvalidRole | ServiceError::Form(_) => {
            HttpResponse::BadRequest().json(MessageResponse::new(err.to_string()))
        }
        ServiceError::DuplicatePhone => {
            HttpResponse::Conflict().json(MessageResponse::new(err.to_string()))
        }
        ServiceError::Internal(message) => {
            log::error!("Request failed: {message}");
            HttpResponse::InternalServerError()
                .json(MessageResponse::new("Erro interno do servidor"))
        }
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
