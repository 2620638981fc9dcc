use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::TypeConstraintError;
use crate::domain::validation::{
    NewTrendValidation as DomainNewTrendValidation, TrendValidation as DomainTrendValidation,
    ValidationVote,
};

/// Diesel model representing the `trend_validations` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::trend_validations)]
pub struct TrendValidation {
    pub id: i32,
    pub trend_id: i32,
    pub validator_id: i32,
    pub vote: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`TrendValidation`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::trend_validations)]
pub struct NewTrendValidation {
    pub trend_id: i32,
    pub validator_id: i32,
    pub vote: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<TrendValidation> for DomainTrendValidation {
    type Error = TypeConstraintError;

    fn try_from(validation: TrendValidation) -> Result<Self, Self::Error> {
        Ok(Self {
            id: validation.id.try_into()?,
            trend_id: validation.trend_id.try_into()?,
            validator_id: validation.validator_id.try_into()?,
            vote: ValidationVote::try_from(validation.vote)?,
            created_at: validation.created_at,
        })
    }
}

impl From<DomainNewTrendValidation> for NewTrendValidation {
    fn from(validation: DomainNewTrendValidation) -> Self {
        Self {
            trend_id: validation.trend_id.get(),
            validator_id: validation.validator_id.get(),
            vote: validation.vote.as_str().to_string(),
            created_at: validation.created_at,
        }
    }
}
