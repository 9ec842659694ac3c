pub mod person;
pub mod project;
