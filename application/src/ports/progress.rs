//! Progress notification port
//!
//! Defines the interface for reporting progress while models are compared.

/// Callback for progress updates during a comparison
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console progress bar, plain text, ...).
/// Completion callbacks arrive in completion order, not request order.
pub trait ComparisonProgress: Send + Sync {
    /// Called before any model call is issued
    fn on_comparison_start(&self, total_models: usize);

    /// Called when one model finishes, successfully or not
    fn on_model_complete(&self, model_key: &str, success: bool);

    /// Called after every model has settled
    fn on_comparison_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ComparisonProgress for NoProgress {
    fn on_comparison_start(&self, _total_models: usize) {}
    fn on_model_complete(&self, _model_key: &str, _success: bool) {}
    fn on_comparison_complete(&self) {}
}
