pub mod name;
pub mod query;
pub mod roster;
pub mod session;
pub mod student;
pub mod summary;
pub mod validation;
