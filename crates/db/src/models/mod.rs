//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO, resolved into a fully-defaulted insert record
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//!
//! API bodies use camelCase field names.

pub mod person;
pub mod project;
pub mod publication;
pub mod status;
