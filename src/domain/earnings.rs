//! Earnings computation for submissions and validation votes.
//!
//! Amounts are in standard currency units. Settlement and cash-out are
//! handled by the payments collaborator; this module only computes what a
//! submission or vote is worth.

use serde::{Deserialize, Serialize};

use crate::domain::trend::NewTrendSubmission;

/// Base amounts, quality bonuses and the per-submission cap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EarningsConfig {
    /// Flat amount for an accepted trend submission.
    pub base_submission: f64,
    /// Flat amount for casting a validation vote.
    pub base_validation_vote: f64,
    /// Bonus paid to the spotter when a submission is auto-approved.
    pub approval_bonus: f64,
    /// Bonus for including a screenshot/thumbnail.
    pub screenshot_bonus: f64,
    /// Bonus for a description that goes beyond the bare title.
    pub complete_info_bonus: f64,
    /// Bonus for naming the creator behind the trend.
    pub creator_info_bonus: f64,
    /// Hard cap on what a single submission can earn.
    pub max_per_submission: f64,
}

impl Default for EarningsConfig {
    fn default() -> Self {
        Self {
            base_submission: 1.00,
            base_validation_vote: 0.10,
            approval_bonus: 0.50,
            screenshot_bonus: 0.15,
            complete_info_bonus: 0.10,
            creator_info_bonus: 0.05,
            max_per_submission: 3.00,
        }
    }
}

impl EarningsConfig {
    /// Earnings for a new submission: base plus quality bonuses, capped.
    pub fn submission_earnings(&self, trend: &NewTrendSubmission) -> f64 {
        let mut amount = self.base_submission;
        if trend.thumbnail_url.is_some() {
            amount += self.screenshot_bonus;
        }
        if trend.description.as_str() != trend.title.as_str() {
            amount += self.complete_info_bonus;
        }
        if trend.creator_handle.is_some() {
            amount += self.creator_info_bonus;
        }
        amount.min(self.max_per_submission)
    }

    /// Earnings for casting a single validation vote.
    pub fn vote_earnings(&self) -> f64 {
        self.base_validation_vote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::trend::Platform;
    use crate::domain::types::{
        CreatorHandle, SpotterId, ThumbnailUrl, TrendDescription, TrendTitle, TrendUrl, WaveScore,
    };
    use chrono::DateTime;

    fn bare_submission() -> NewTrendSubmission {
        let now = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        NewTrendSubmission {
            spotter_id: SpotterId::new(1).unwrap(),
            title: TrendTitle::new("Silent vlogging").unwrap(),
            description: TrendDescription::new("Silent vlogging").unwrap(),
            url: TrendUrl::new("https://example.com/video/1").unwrap(),
            thumbnail_url: None,
            creator_handle: None,
            platform: Platform::Tiktok,
            category: Category::CreatorTechnique,
            wave_score: WaveScore::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn bare_submission_earns_base_amount() {
        let config = EarningsConfig::default();
        assert_eq!(config.submission_earnings(&bare_submission()), 1.00);
    }

    #[test]
    fn quality_bonuses_stack() {
        let config = EarningsConfig::default();
        let mut trend = bare_submission();
        trend.thumbnail_url = Some(ThumbnailUrl::new("https://example.com/t.jpg").unwrap());
        trend.creator_handle = Some(CreatorHandle::new("@creator").unwrap());
        trend.description =
            TrendDescription::new("Creators filming entire vlogs without speaking").unwrap();

        let expected = 1.00 + 0.15 + 0.10 + 0.05;
        assert!((config.submission_earnings(&trend) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn cap_limits_total() {
        let config = EarningsConfig {
            base_submission: 5.0,
            ..EarningsConfig::default()
        };
        assert_eq!(config.submission_earnings(&bare_submission()), 3.00);
    }
}
