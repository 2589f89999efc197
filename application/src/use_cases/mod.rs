//! Use cases (application services)

pub mod compare_models;
