//! OpenAPI description of the JSON endpoints.

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::dto::api::{MessageResponse, OperationResponse};
use crate::dto::contact::ContactDto;
use crate::dto::professional::ProfessionalDto;
use crate::forms::contact::{ContactForm, UpdateContactForm};
use crate::forms::professional::{ProfessionalForm, UpdateProfessionalForm};
use crate::routes::{contact, professional};

#[derive(OpenApi)]
#[openapi(
    info(title = "Staff registry", description = "Professionals and their contacts"),
    paths(
        professional::list_professionals,
        professional::show_professional,
        professional::create_professional,
        professional::update_professional,
        professional::deactivate_professional,
        contact::list_contacts,
        contact::show_contact,
        contact::create_contact,
        contact::update_contact,
        contact::delete_contact,
    ),
    components(schemas(
        ProfessionalDto,
        ContactDto,
        ProfessionalForm,
        UpdateProfessionalForm,
        ContactForm,
        UpdateContactForm,
        OperationResponse,
        MessageResponse,
    )),
    tags(
        (name = "profissional", description = "Professionals; deletion is a soft delete"),
        (name = "contato", description = "Contacts owned by active professionals"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn document() -> Value {
        serde_json::to_value(ApiDoc::openapi()).unwrap()
    }

    #[test]
    fn every_endpoint_is_described() {
        let doc = document();
        let paths = &doc["paths"];

        for (path, methods) in [
            ("/profissional", ["get", "post"].as_slice()),
            ("/profissional/{id}", ["get", "put", "delete"].as_slice()),
            ("/contato", ["get", "post"].as_slice()),
            ("/contato/{id}", ["get", "put", "delete"].as_slice()),
        ] {
            for method in methods {
                assert!(
                    paths[path][method].is_object(),
                    "missing {method} {path}"
                );
            }
        }
    }

    #[test]
    fn duplicate_phone_is_documented_as_conflict() {
        let doc = document();
        assert!(doc["paths"]["/contato"]["post"]["responses"]["409"].is_object());
    }

    #[test]
    fn schemas_use_wire_field_names() {
        let doc = document();
        let professional = &doc["components"]["schemas"]["ProfessionalDto"]["properties"];

        assert!(professional["dataNascimento"].is_object());
        assert!(professional["createdDate"].is_object());
        assert!(doc["components"]["schemas"]["ContactForm"]["properties"]["contato"].is_object());
    }
}
