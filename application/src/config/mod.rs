//! Application-level configuration.
//!
//! - [`GenerationParams`] - fixed sampling settings used by every provider adapter

pub mod generation_params;

pub use generation_params::GenerationParams;
