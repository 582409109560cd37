//! Portfolio backend: greeting routes, a static project catalog, a validated
//! contact form backed by a document store, and a diagnostic endpoint.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
