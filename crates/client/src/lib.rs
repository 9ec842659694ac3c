//! Read-only consumer of the RAI-Lab API.
//!
//! [`api::LabClient`] fetches people and projects, [`pages`] arranges them
//! with the shared grouping rules, and [`render`] turns a page into text.

pub mod api;
pub mod models;
pub mod pages;
pub mod render;
