//! Domain logic shared by the RAI-Lab store, API and client crates.
//!
//! Nothing in this crate performs I/O: it holds the identifier type, the
//! error taxonomy, the grouping/ordering used to present people and
//! projects, and the field policy applied by partial updates.

pub mod error;
pub mod grouping;
pub mod patch;
pub mod portfolio;
pub mod roster;
pub mod types;
