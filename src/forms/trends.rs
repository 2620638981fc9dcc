use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::Category;
use crate::domain::trend::{NewTrendSubmission, Platform};
use crate::domain::types::{
    CreatorHandle, SpotterId, ThumbnailUrl, TrendDescription, TrendTitle, TrendUrl,
    TypeConstraintError, WaveScore,
};

/// Raw trend submission payload as posted by clients.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitTrendForm {
    #[validate(range(min = 1))]
    pub spotter_id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub url: String,
    #[validate(url)]
    pub thumbnail_url: Option<String>,
    pub creator_handle: Option<String>,
    pub platform: Option<String>,
    /// Free-form category label; mapped onto the fixed enum, never rejected.
    pub category: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub wave_score: Option<i32>,
}

/// Validated, strongly-typed form of [`SubmitTrendForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTrendFormPayload {
    pub spotter_id: SpotterId,
    pub title: TrendTitle,
    pub description: TrendDescription,
    pub url: TrendUrl,
    pub thumbnail_url: Option<ThumbnailUrl>,
    pub creator_handle: Option<CreatorHandle>,
    pub platform: Platform,
    pub category: Category,
    pub wave_score: WaveScore,
}

impl SubmitTrendFormPayload {
    pub fn into_new_trend(self) -> NewTrendSubmission {
        let now = Utc::now().naive_utc();
        NewTrendSubmission {
            spotter_id: self.spotter_id,
            title: self.title,
            description: self.description,
            url: self.url,
            thumbnail_url: self.thumbnail_url,
            creator_handle: self.creator_handle,
            platform: self.platform,
            category: self.category,
            wave_score: self.wave_score,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitTrendFormError {
    #[error("Trend submission form validation failed: {0}")]
    Validation(String),
    #[error("Trend submission form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SubmitTrendFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SubmitTrendFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<SubmitTrendForm> for SubmitTrendFormPayload {
    type Error = SubmitTrendFormError;

    fn try_from(value: SubmitTrendForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let title = TrendTitle::new(value.title)?;
        // Missing descriptions fall back to the title so the record stays
        // renderable.
        let description = match non_blank(value.description) {
            Some(description) => TrendDescription::new(description)?,
            None => TrendDescription::new(title.as_str())?,
        };

        Ok(Self {
            spotter_id: SpotterId::new(value.spotter_id)?,
            title,
            description,
            url: TrendUrl::new(value.url)?,
            thumbnail_url: non_blank(value.thumbnail_url)
                .map(ThumbnailUrl::new)
                .transpose()?,
            creator_handle: non_blank(value.creator_handle)
                .map(CreatorHandle::new)
                .transpose()?,
            platform: Platform::from_label(value.platform.as_deref().unwrap_or_default()),
            category: Category::from_label(value.category.as_deref().unwrap_or_default()),
            wave_score: match value.wave_score {
                Some(score) => WaveScore::new(score)?,
                None => WaveScore::default(),
            },
        })
    }
}
