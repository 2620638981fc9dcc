use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::trend::{
    NewTrendSubmission as DomainNewTrendSubmission, Platform, TrendStatus,
    TrendSubmission as DomainTrendSubmission,
};
use crate::domain::types::{
    CreatorHandle, ThumbnailUrl, TrendDescription, TrendTitle, TrendUrl, TypeConstraintError,
    WaveScore,
};

/// Diesel model representing the `trend_submissions` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::trend_submissions)]
pub struct TrendSubmission {
    pub id: i32,
    pub spotter_id: i32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub creator_handle: Option<String>,
    pub platform: String,
    pub category: String,
    pub status: String,
    pub validation_count: i32,
    pub approve_count: i32,
    pub reject_count: i32,
    pub wave_score: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`TrendSubmission`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::trend_submissions)]
pub struct NewTrendSubmission {
    pub spotter_id: i32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub creator_handle: Option<String>,
    pub platform: String,
    pub category: String,
    pub status: String,
    pub wave_score: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<TrendSubmission> for DomainTrendSubmission {
    type Error = TypeConstraintError;

    fn try_from(trend: TrendSubmission) -> Result<Self, Self::Error> {
        Ok(Self {
            id: trend.id.try_into()?,
            spotter_id: trend.spotter_id.try_into()?,
            title: TrendTitle::new(trend.title)?,
            description: TrendDescription::new(trend.description)?,
            url: TrendUrl::new(trend.url)?,
            thumbnail_url: trend.thumbnail_url.map(ThumbnailUrl::new).transpose()?,
            creator_handle: trend.creator_handle.map(CreatorHandle::new).transpose()?,
            platform: Platform::try_from(trend.platform)?,
            category: Category::try_from(trend.category)?,
            status: TrendStatus::try_from(trend.status)?,
            // Counters pass through unclamped; the policy treats negatives
            // as zero when rows arrive from partially-loaded data.
            validation_count: trend.validation_count,
            approve_count: trend.approve_count,
            reject_count: trend.reject_count,
            wave_score: WaveScore::new(trend.wave_score.clamp(0, 100))?,
            created_at: trend.created_at,
            updated_at: trend.updated_at,
        })
    }
}

impl From<DomainNewTrendSubmission> for NewTrendSubmission {
    fn from(trend: DomainNewTrendSubmission) -> Self {
        Self {
            spotter_id: trend.spotter_id.get(),
            title: trend.title.into_inner(),
            description: trend.description.into_inner(),
            url: trend.url.into_inner(),
            thumbnail_url: trend.thumbnail_url.map(ThumbnailUrl::into_inner),
            creator_handle: trend.creator_handle.map(CreatorHandle::into_inner),
            platform: trend.platform.as_str().to_string(),
            category: trend.category.as_str().to_string(),
            status: TrendStatus::Submitted.as_str().to_string(),
            wave_score: trend.wave_score.get(),
            created_at: trend.created_at,
            updated_at: trend.updated_at,
        }
    }
}
