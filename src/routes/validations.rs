use actix_web::{HttpResponse, Responder, post, web};

use crate::domain::earnings::EarningsConfig;
use crate::domain::policy::ValidationPolicy;
use crate::domain::types::TrendId;
use crate::forms::validations::{SubmitVoteForm, SubmitVoteFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::validations::submit_vote as submit_vote_service;

#[post("/v1/trends/{trend_id}/validations")]
pub async fn submit_vote(
    trend_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    policy: web::Data<ValidationPolicy>,
    earnings: web::Data<EarningsConfig>,
    web::Json(form): web::Json<SubmitVoteForm>,
) -> impl Responder {
    let trend_id: TrendId = match trend_id.into_inner().try_into() {
        Ok(id) => id,
        Err(e) => return error_response(ServiceError::Form(e.to_string())),
    };

    let payload: SubmitVoteFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::Form(e.to_string())),
    };

    match submit_vote_service(
        trend_id,
        payload,
        policy.get_ref(),
        earnings.get_ref(),
        repo.get_ref(),
    ) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err),
    }
}
