pub mod category;
pub mod earnings;
pub mod policy;
pub mod trend;
pub mod types;
pub mod validation;
