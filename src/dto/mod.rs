pub mod categories;
pub mod trends;
