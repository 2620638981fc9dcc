pub mod trends;
pub mod validations;
