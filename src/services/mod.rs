pub mod categories;
pub mod errors;
pub mod trends;
pub mod validations;

pub use errors::{ServiceError, ServiceResult};
