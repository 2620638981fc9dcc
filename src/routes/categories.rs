use actix_web::{HttpResponse, Responder, get};

use crate::routes::error_response;
use crate::services::categories::show_categories as show_categories_service;

#[get("/v1/categories")]
pub async fn show_categories() -> impl Responder {
    match show_categories_service() {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err),
    }
}
