//! Error conversion glue between the domain, forms and service layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here where both sides are in scope.

use crate::domain::types::TypeConstraintError;
use crate::forms::trends::SubmitTrendFormError;
use crate::forms::validations::SubmitVoteFormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<SubmitTrendFormError> for ServiceError {
    fn from(val: SubmitTrendFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<SubmitVoteFormError> for ServiceError {
    fn from(val: SubmitVoteFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
