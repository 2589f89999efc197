//! Structured configuration issues.
//!
//! Config loading never panics on bad values; it reports issues with a
//! severity so the caller can decide whether to abort or just warn.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A `[[models]]` entry has an empty key or vendor model id.
    EmptyModelField { field: String },
    /// The same model key appears twice in `[[models]]`.
    DuplicateModelKey { key: String },
    /// A `[[models]]` entry names a vendor with no adapter.
    UnknownVendor { key: String, vendor: String },
    /// No credential could be found for a vendor the catalog uses.
    MissingApiKey { vendor: String, env_var: String },
    /// An enum-like field holds a value outside its valid set.
    InvalidEnumValue { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
