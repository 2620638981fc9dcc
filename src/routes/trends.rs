use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::earnings::EarningsConfig;
use crate::domain::policy::ValidationPolicy;
use crate::domain::trend::TrendStatus;
use crate::domain::types::{SpotterId, TrendId};
use crate::forms::trends::{SubmitTrendForm, SubmitTrendFormPayload};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{DieselRepository, TrendListQuery};
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::trends::{
    show_trend as show_trend_service, show_trends as show_trends_service,
    submit_trend as submit_trend_service,
};

#[derive(Deserialize, Debug)]
struct TrendsQueryParams {
    category: Option<String>,
    status: Option<String>,
    spotter_id: Option<i32>,
    query: Option<String>,
    page: Option<usize>,
}

#[post("/v1/trends")]
pub async fn submit_trend(
    repo: web::Data<DieselRepository>,
    policy: web::Data<ValidationPolicy>,
    earnings: web::Data<EarningsConfig>,
    web::Json(form): web::Json<SubmitTrendForm>,
) -> impl Responder {
    let payload: SubmitTrendFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::Form(e.to_string())),
    };

    match submit_trend_service(payload, policy.get_ref(), earnings.get_ref(), repo.get_ref()) {
        Ok(submitted) => HttpResponse::Created().json(submitted),
        Err(err) => error_response(err),
    }
}

#[get("/v1/trends")]
pub async fn list_trends(
    params: web::Query<TrendsQueryParams>,
    repo: web::Data<DieselRepository>,
    policy: web::Data<ValidationPolicy>,
) -> impl Responder {
    let mut query = TrendListQuery::default();

    // Category filters arrive as free-form labels; fold them like stored data.
    if let Some(category) = &params.category {
        query = query.category(Category::from_label(category));
    }
    if let Some(status) = &params.status {
        match TrendStatus::try_from(status.as_str()) {
            Ok(status) => query = query.status(status),
            Err(e) => return error_response(ServiceError::Form(e.to_string())),
        }
    }
    if let Some(spotter_id) = params.spotter_id {
        match SpotterId::new(spotter_id) {
            Ok(spotter_id) => query = query.spotter(spotter_id),
            Err(e) => return error_response(ServiceError::Form(e.to_string())),
        }
    }
    if let Some(search) = &params.query {
        if !search.is_empty() {
            query = query.search(search);
        }
    }
    query = query.paginate(params.page.unwrap_or(1), DEFAULT_ITEMS_PER_PAGE);

    match show_trends_service(query, policy.get_ref(), repo.get_ref()) {
        Ok(listed) => HttpResponse::Ok().json(listed),
        Err(err) => error_response(err),
    }
}

#[get("/v1/trends/{trend_id}")]
pub async fn show_trend(
    trend_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    policy: web::Data<ValidationPolicy>,
) -> impl Responder {
    let trend_id: TrendId = match trend_id.into_inner().try_into() {
        Ok(id) => id,
        Err(e) => return error_response(ServiceError::Form(e.to_string())),
    };

    match show_trend_service(trend_id, policy.get_ref(), repo.get_ref()) {
        Ok(trend) => HttpResponse::Ok().json(trend),
        Err(err) => error_response(err),
    }
}
