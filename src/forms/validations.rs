use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{TypeConstraintError, ValidatorId};
use crate::domain::validation::ValidationVote;

/// Raw validation vote payload as posted by clients.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitVoteForm {
    #[validate(range(min = 1))]
    pub validator_id: i32,
    #[validate(length(min = 1))]
    pub vote: String,
}

/// Validated, strongly-typed form of [`SubmitVoteForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitVoteFormPayload {
    pub validator_id: ValidatorId,
    pub vote: ValidationVote,
}

#[derive(Debug, Error)]
pub enum SubmitVoteFormError {
    #[error("Vote form validation failed: {0}")]
    Validation(String),
    #[error("Vote form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SubmitVoteFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SubmitVoteFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SubmitVoteForm> for SubmitVoteFormPayload {
    type Error = SubmitVoteFormError;

    fn try_from(value: SubmitVoteForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            validator_id: ValidatorId::new(value.validator_id)?,
            vote: ValidationVote::try_from(value.vote)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vote_strings() {
        let form = SubmitVoteForm {
            validator_id: 2,
            vote: "verify".to_string(),
        };
        let payload: SubmitVoteFormPayload = form.try_into().unwrap();
        assert_eq!(payload.vote, ValidationVote::Verify);
        assert_eq!(payload.validator_id.get(), 2);
    }

    #[test]
    fn rejects_unknown_vote_strings() {
        let form = SubmitVoteForm {
            validator_id: 2,
            vote: "maybe".to_string(),
        };
        let payload: Result<SubmitVoteFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }
}
