use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod trends;
pub mod validations;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Map a service error onto the matching HTTP response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody {
            error: "not found".to_string(),
        }),
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(ErrorBody { error: message })
        }
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(ErrorBody { error: message })
        }
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}
