//! Comparison subdomain: the outputs of asking several models one prompt.

pub mod value_objects;

pub use value_objects::{ComparisonResult, ModelListing, ModelResponse};
