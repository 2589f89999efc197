//! Generation parameters: fixed sampling settings sent to every vendor.
//!
//! These are application constants, not request input: callers of the
//! comparison never choose them, so every model answers under the same
//! output budget and temperature.

/// Upper bound on generated tokens per response.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Sampling parameters shared by all provider adapters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.max_tokens, 1000);
        assert!((params.temperature - 0.7).abs() < f32::EPSILON);
    }
}
