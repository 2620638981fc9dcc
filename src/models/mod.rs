#[cfg(feature = "server")]
pub mod config;
pub mod trend;
pub mod validation;
