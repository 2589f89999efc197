//! Query value object

use super::error::DomainError;
use serde::Serialize;

/// A prompt to be answered by several models side by side (Value Object)
///
/// The prompt is guaranteed non-blank and at least one model key is present.
/// Keys are kept verbatim and in request order; they are not checked against
/// the catalog here, since an unknown key only degrades its own response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    prompt: String,
    model_keys: Vec<String>,
}

impl Query {
    /// Try to create a new query, rejecting a blank prompt or an empty key list
    pub fn try_new(
        prompt: impl Into<String>,
        model_keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }

        let model_keys: Vec<String> = model_keys.into_iter().map(Into::into).collect();
        if model_keys.is_empty() {
            return Err(DomainError::NoModels);
        }

        Ok(Self { prompt, model_keys })
    }

    /// Get the prompt content
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Requested model keys, in request order
    pub fn model_keys(&self) -> &[String] {
        &self.model_keys
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.prompt, self.model_keys.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = Query::try_new("What is Rust?", ["openai", "claude"]).unwrap();
        assert_eq!(q.prompt(), "What is Rust?");
        assert_eq!(q.model_keys(), &["openai".to_string(), "claude".to_string()]);
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert_eq!(
            Query::try_new("", ["openai"]).unwrap_err(),
            DomainError::EmptyPrompt
        );
        assert_eq!(
            Query::try_new("   \n\t", ["openai"]).unwrap_err(),
            DomainError::EmptyPrompt
        );
    }

    #[test]
    fn test_no_models_rejected() {
        let keys: Vec<String> = vec![];
        assert_eq!(
            Query::try_new("ping", keys).unwrap_err(),
            DomainError::NoModels
        );
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let q = Query::try_new("ping", ["nope", "openai", "nope"]).unwrap();
        assert_eq!(q.model_keys().len(), 3);
        assert_eq!(q.model_keys()[0], "nope");
    }
}
