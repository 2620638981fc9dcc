use crate::domain::earnings::EarningsConfig;
use crate::domain::policy::ValidationPolicy;
use crate::domain::types::TrendId;
use crate::dto::trends::{SubmittedTrendDto, TrendDto, TrendListDto};
use crate::forms::trends::SubmitTrendFormPayload;
use crate::repository::{TrendListQuery, TrendReader, TrendWriter};

use super::{ServiceError, ServiceResult};

/// Persist a new trend submission.
///
/// The free-form category label has already been folded onto the fixed enum
/// by the form payload, so only canonical values reach storage. Returns the
/// stored record together with its computed earnings.
pub fn submit_trend<R>(
    payload: SubmitTrendFormPayload,
    policy: &ValidationPolicy,
    earnings: &EarningsConfig,
    repo: &R,
) -> ServiceResult<SubmittedTrendDto>
where
    R: TrendWriter,
{
    let trend = payload.into_new_trend();
    let amount = earnings.submission_earnings(&trend);

    match repo.create_trend(&trend) {
        Ok(created) => Ok(SubmittedTrendDto {
            trend: TrendDto::from_domain(created, policy),
            earnings: amount,
        }),
        Err(e) => {
            log::error!("Failed to create trend submission: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List trend submissions matching the query.
pub fn show_trends<R>(
    query: TrendListQuery,
    policy: &ValidationPolicy,
    repo: &R,
) -> ServiceResult<TrendListDto>
where
    R: TrendReader,
{
    match repo.list_trends(query) {
        Ok((total, trends)) => Ok(TrendListDto {
            total,
            trends: trends
                .into_iter()
                .map(|t| TrendDto::from_domain(t, policy))
                .collect(),
        }),
        Err(e) => {
            log::error!("Failed to list trends: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a single trend submission.
pub fn show_trend<R>(
    trend_id: TrendId,
    policy: &ValidationPolicy,
    repo: &R,
) -> ServiceResult<TrendDto>
where
    R: TrendReader,
{
    match repo.get_trend_by_id(trend_id) {
        Ok(Some(trend)) => Ok(TrendDto::from_domain(trend, policy)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get trend: {e}");
            Err(ServiceError::Internal)
        }
    }
}
