//! `POST /ask` payload parsing
//!
//! Two shapes are accepted:
//!
//! - single: `{"prompt": "...", "model": "claude"}` answered with one object
//! - multi: `{"query": "...", "models": ["openai", "claude"]}` answered with an array
//!
//! The multi form is assumed whenever `query` or `models` is present, or
//! when neither form can be recognized.

use boxai_domain::Query;
use serde_json::Value;
use thiserror::Error;

const SINGLE_USAGE: &str = "Invalid request. Please provide a prompt and a model.";
const MULTI_USAGE: &str = "Invalid request. Please provide a query and at least one model.";

/// Which payload shape the caller used; the response mirrors it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskForm {
    Single,
    Multi,
}

#[derive(Error, Debug)]
pub enum RequestError {
    /// Body is not JSON at all
    #[error("Malformed JSON body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// JSON, but missing or blank fields
    #[error("{0}")]
    Invalid(&'static str),
}

/// A validated `/ask` request
#[derive(Debug)]
pub struct AskRequest {
    pub form: AskForm,
    pub query: Query,
}

impl AskRequest {
    pub fn parse(body: &[u8]) -> Result<Self, RequestError> {
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(body)?
        };

        let single = value.get("query").is_none()
            && value.get("models").is_none()
            && (value.get("prompt").is_some() || value.get("model").is_some());

        if single {
            Self::parse_single(&value)
        } else {
            Self::parse_multi(&value)
        }
    }

    fn parse_single(value: &Value) -> Result<Self, RequestError> {
        let prompt = non_blank(value.get("prompt")).ok_or(RequestError::Invalid(SINGLE_USAGE))?;
        let model = non_blank(value.get("model")).ok_or(RequestError::Invalid(SINGLE_USAGE))?;

        let query =
            Query::try_new(prompt, [model]).map_err(|_| RequestError::Invalid(SINGLE_USAGE))?;
        Ok(Self {
            form: AskForm::Single,
            query,
        })
    }

    fn parse_multi(value: &Value) -> Result<Self, RequestError> {
        let prompt = non_blank(value.get("query")).ok_or(RequestError::Invalid(MULTI_USAGE))?;
        let models = value
            .get("models")
            .and_then(Value::as_array)
            .ok_or(RequestError::Invalid(MULTI_USAGE))?;

        // Non-string entries are kept as their JSON text so they come back
        // as unsupported models instead of vanishing from the response.
        let keys: Vec<String> = models
            .iter()
            .map(|m| match m {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        let query = Query::try_new(prompt, keys).map_err(|_| RequestError::Invalid(MULTI_USAGE))?;
        Ok(Self {
            form: AskForm::Multi,
            query,
        })
    }
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<AskRequest, RequestError> {
        AskRequest::parse(body.as_bytes())
    }

    #[test]
    fn test_multi_form() {
        let request = parse(r#"{"query": "ping", "models": ["openai", "claude"]}"#).unwrap();
        assert_eq!(request.form, AskForm::Multi);
        assert_eq!(request.query.prompt(), "ping");
        assert_eq!(request.query.model_keys(), ["openai", "claude"]);
    }

    #[test]
    fn test_single_form() {
        let request = parse(r#"{"prompt": "ping", "model": "gpt4"}"#).unwrap();
        assert_eq!(request.form, AskForm::Single);
        assert_eq!(request.query.model_keys(), ["gpt4"]);
    }

    #[test]
    fn test_blank_query_is_invalid() {
        let err = parse(r#"{"query": "   ", "models": ["openai"]}"#).unwrap_err();
        assert!(matches!(err, RequestError::Invalid(MULTI_USAGE)));
    }

    #[test]
    fn test_empty_models_is_invalid() {
        assert!(matches!(
            parse(r#"{"query": "ping", "models": []}"#),
            Err(RequestError::Invalid(_))
        ));
        assert!(matches!(
            parse(r#"{"query": "ping", "models": "openai"}"#),
            Err(RequestError::Invalid(_))
        ));
        assert!(matches!(
            parse(r#"{"query": "ping"}"#),
            Err(RequestError::Invalid(_))
        ));
    }

    #[test]
    fn test_single_form_requires_model() {
        let err = parse(r#"{"prompt": "ping", "model": ""}"#).unwrap_err();
        assert!(matches!(err, RequestError::Invalid(SINGLE_USAGE)));
    }

    #[test]
    fn test_empty_body_is_invalid_not_malformed() {
        assert!(matches!(parse(""), Err(RequestError::Invalid(MULTI_USAGE))));
        assert!(matches!(parse("[]"), Err(RequestError::Invalid(MULTI_USAGE))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse(r#"{"query": "ping", "models": ["#),
            Err(RequestError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_string_model_is_kept() {
        let request = parse(r#"{"query": "ping", "models": ["openai", 42]}"#).unwrap();
        assert_eq!(request.query.model_keys(), ["openai", "42"]);
    }
}
