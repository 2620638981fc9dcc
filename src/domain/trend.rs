//! Trend submission entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::category::Category;
use crate::domain::types::{
    CreatorHandle, SpotterId, ThumbnailUrl, TrendDescription, TrendId, TrendTitle, TrendUrl,
    TypeConstraintError, WaveScore,
};

/// Platform the trending content was spotted on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Tiktok,
    Instagram,
    Twitter,
    Youtube,
    Reddit,
    Other,
}

impl Platform {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tiktok => "tiktok",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Reddit => "reddit",
            Self::Other => "other",
        }
    }

    /// Lenient parse for UI input: unknown platforms fold into [`Platform::Other`].
    pub fn from_label(label: &str) -> Platform {
        Self::try_from(label.trim().to_lowercase().as_str()).unwrap_or(Self::Other)
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Platform {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "tiktok" => Ok(Self::Tiktok),
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            "youtube" => Ok(Self::Youtube),
            "reddit" => Ok(Self::Reddit),
            "other" => Ok(Self::Other),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "platform: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.as_str().to_string()
    }
}

/// Lifecycle state of a trend submission.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendStatus {
    Submitted,
    Validating,
    Approved,
    Rejected,
    Viral,
    Archived,
}

impl TrendStatus {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Validating => "validating",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Viral => "viral",
            Self::Archived => "archived",
        }
    }

    /// Whether the submission still accumulates community votes.
    pub const fn is_open_for_validation(self) -> bool {
        matches!(self, Self::Submitted | Self::Validating)
    }
}

impl Display for TrendStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for TrendStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "submitted" => Ok(Self::Submitted),
            "validating" => Ok(Self::Validating),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "viral" => Ok(Self::Viral),
            "archived" => Ok(Self::Archived),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "trend status: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for TrendStatus {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<TrendStatus> for String {
    fn from(value: TrendStatus) -> Self {
        value.as_str().to_string()
    }
}

/// A user-submitted trend record with its accumulated vote counters.
///
/// The counters are raw `i32` on purpose: rows synced from partially-loaded
/// or legacy data may carry out-of-range values, and threshold decisions
/// must remain evaluable for display. [`crate::domain::policy::ValidationPolicy`]
/// clamps negatives at its boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSubmission {
    pub id: TrendId,
    pub spotter_id: SpotterId,
    pub title: TrendTitle,
    pub description: TrendDescription,
    pub url: TrendUrl,
    pub thumbnail_url: Option<ThumbnailUrl>,
    pub creator_handle: Option<CreatorHandle>,
    pub platform: Platform,
    pub category: Category,
    pub status: TrendStatus,
    pub validation_count: i32,
    pub approve_count: i32,
    pub reject_count: i32,
    pub wave_score: WaveScore,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`TrendSubmission`].
///
/// New submissions always start in [`TrendStatus::Submitted`] with zeroed
/// counters; those columns are owned by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTrendSubmission {
    pub spotter_id: SpotterId,
    pub title: TrendTitle,
    pub description: TrendDescription,
    pub url: TrendUrl,
    pub thumbnail_url: Option<ThumbnailUrl>,
    pub creator_handle: Option<CreatorHandle>,
    pub platform: Platform,
    pub category: Category,
    pub wave_score: WaveScore,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_folds_into_other() {
        assert_eq!(Platform::from_label("TikTok"), Platform::Tiktok);
        assert_eq!(Platform::from_label("myspace"), Platform::Other);
        assert_eq!(Platform::from_label(""), Platform::Other);
    }

    #[test]
    fn terminal_statuses_are_closed_for_validation() {
        assert!(TrendStatus::Submitted.is_open_for_validation());
        assert!(TrendStatus::Validating.is_open_for_validation());
        assert!(!TrendStatus::Approved.is_open_for_validation());
        assert!(!TrendStatus::Rejected.is_open_for_validation());
        assert!(!TrendStatus::Archived.is_open_for_validation());
    }
}
