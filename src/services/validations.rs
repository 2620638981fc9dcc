use chrono::Utc;

use crate::domain::earnings::EarningsConfig;
use crate::domain::policy::ValidationPolicy;
use crate::domain::trend::TrendStatus;
use crate::domain::types::TrendId;
use crate::domain::validation::NewTrendValidation;
use crate::dto::trends::{TrendDto, VoteOutcomeDto};
use crate::forms::validations::SubmitVoteFormPayload;
use crate::repository::{RepositoryError, TrendReader, TrendWriter, ValidationWriter};

use super::{ServiceError, ServiceResult};

/// Record a community vote on a trend and apply the threshold policy.
///
/// Rejects self-votes, duplicate votes and votes on resolved submissions.
/// After the vote lands, the policy decides whether the submission is
/// auto-approved or auto-rejected; the first vote also moves a fresh
/// submission into `validating`.
pub fn submit_vote<R>(
    trend_id: TrendId,
    payload: SubmitVoteFormPayload,
    policy: &ValidationPolicy,
    earnings: &EarningsConfig,
    repo: &R,
) -> ServiceResult<VoteOutcomeDto>
where
    R: TrendReader + TrendWriter + ValidationWriter,
{
    let trend = match repo.get_trend_by_id(trend_id) {
        Ok(Some(trend)) => trend,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get trend: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if !trend.status.is_open_for_validation() {
        return Err(ServiceError::Conflict(
            "trend is no longer open for validation".to_string(),
        ));
    }

    if trend.spotter_id.get() == payload.validator_id.get() {
        return Err(ServiceError::Conflict(
            "spotters cannot validate their own trends".to_string(),
        ));
    }

    let validation = NewTrendValidation {
        trend_id,
        validator_id: payload.validator_id,
        vote: payload.vote,
        created_at: Utc::now().naive_utc(),
    };

    let mut updated = match repo.create_validation(&validation) {
        Ok(updated) => updated,
        Err(RepositoryError::Duplicate) => {
            return Err(ServiceError::Conflict(
                "validator has already voted on this trend".to_string(),
            ));
        }
        Err(e) => {
            log::error!("Failed to record validation vote: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let resolved = policy.auto_resolution(updated.approve_count, updated.reject_count);
    let next_status = match resolved {
        Some(status) => Some(status),
        None if updated.status == TrendStatus::Submitted => Some(TrendStatus::Validating),
        None => None,
    };

    if let Some(status) = next_status {
        if let Err(e) = repo.set_trend_status(trend_id, status) {
            log::error!("Failed to update trend status: {e}");
            return Err(ServiceError::Internal);
        }
        updated.status = status;
    }

    let spotter_bonus = match resolved {
        Some(TrendStatus::Approved) => Some(earnings.approval_bonus),
        _ => None,
    };

    Ok(VoteOutcomeDto {
        trend: TrendDto::from_domain(updated, policy),
        auto_resolved: resolved.map(|s| s.as_str().to_string()),
        earnings: earnings.vote_earnings(),
        spotter_bonus,
    })
}
