//! Community validation votes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::{TrendId, TypeConstraintError, ValidationId, ValidatorId};

/// Direction of a community validation vote.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValidationVote {
    Verify,
    Reject,
}

impl ValidationVote {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Reject => "reject",
        }
    }
}

impl Display for ValidationVote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ValidationVote {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "verify" => Ok(Self::Verify),
            "reject" => Ok(Self::Reject),
            other => Err(TypeConstraintError::InvalidValue(format!("vote: {other}"))),
        }
    }
}

impl TryFrom<String> for ValidationVote {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<ValidationVote> for String {
    fn from(value: ValidationVote) -> Self {
        value.as_str().to_string()
    }
}

/// A recorded validation vote. At most one per validator per trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendValidation {
    pub id: ValidationId,
    pub trend_id: TrendId,
    pub validator_id: ValidatorId,
    pub vote: ValidationVote,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`TrendValidation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTrendValidation {
    pub trend_id: TrendId,
    pub validator_id: ValidatorId,
    pub vote: ValidationVote,
    pub created_at: NaiveDateTime,
}
