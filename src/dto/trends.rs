use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::policy::ValidationPolicy;
use crate::domain::trend::TrendSubmission;

/// Trend submission as rendered to API clients.
///
/// Carries the payment-eligibility verdict and the threshold itself so the
/// UI can render "paid after N validations" without duplicating the policy.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendDto {
    pub id: i32,
    pub spotter_id: i32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub creator_handle: Option<String>,
    pub platform: String,
    pub category: String,
    pub category_label: String,
    pub status: String,
    pub validation_count: i32,
    pub approve_count: i32,
    pub reject_count: i32,
    pub wave_score: i32,
    pub payment_eligible: bool,
    pub validations_required_for_payment: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TrendDto {
    pub fn from_domain(trend: TrendSubmission, policy: &ValidationPolicy) -> Self {
        Self {
            id: trend.id.get(),
            spotter_id: trend.spotter_id.get(),
            title: trend.title.into_inner(),
            description: trend.description.into_inner(),
            url: trend.url.into_inner(),
            thumbnail_url: trend.thumbnail_url.map(Into::into),
            creator_handle: trend.creator_handle.map(Into::into),
            platform: trend.platform.as_str().to_string(),
            category: trend.category.as_str().to_string(),
            category_label: trend.category.display_label().to_string(),
            status: trend.status.as_str().to_string(),
            validation_count: trend.validation_count,
            approve_count: trend.approve_count,
            reject_count: trend.reject_count,
            wave_score: trend.wave_score.get(),
            payment_eligible: policy.is_eligible_for_payment(trend.validation_count),
            validations_required_for_payment: policy.required_validations_for_payment,
            created_at: trend.created_at,
            updated_at: trend.updated_at,
        }
    }
}

/// Response for a freshly submitted trend, including what it earned.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubmittedTrendDto {
    pub trend: TrendDto,
    pub earnings: f64,
}

/// Response for a recorded validation vote.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoteOutcomeDto {
    pub trend: TrendDto,
    /// Set when the vote tipped the submission into a terminal status.
    pub auto_resolved: Option<String>,
    /// What the validator earned for casting this vote.
    pub earnings: f64,
    /// Bonus credited to the spotter when this vote triggered approval.
    pub spotter_bonus: Option<f64>,
}

/// Paginated trend listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendListDto {
    pub total: usize,
    pub trends: Vec<TrendDto>,
}
