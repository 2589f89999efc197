//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelDescriptor`] - one entry of the model catalog
//! - [`model::Vendor`] - which provider serves a model
//! - [`query::Query`] - a validated prompt plus the requested model keys
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod query;
pub mod string;
