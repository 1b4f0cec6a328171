//! Error types for the reference scaffold.

use thiserror::Error;

/// Failure while decoding input, running a solution or encoding its result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Standard input is not one JSON object.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The input object has no field for a declared parameter.
    #[error("missing parameter: {0}")]
    MissingParameter(String),
    /// A JSON value does not have the shape its DSL type requires.
    #[error("type mismatch at {context}: expected {expected}, found {found}")]
    TypeMismatch {
        context: String,
        expected: String,
        found: String,
    },
    /// The solution returned the wrong number of values or failed itself.
    #[error("solution error: {0}")]
    Solution(String),
    /// The result could not be written as JSON.
    #[error("encode error: {0}")]
    Encode(String),
}

impl EvalError {
    pub(crate) fn mismatch(
        context: impl Into<String>,
        expected: impl Into<String>,
        found: &serde_json::Value,
    ) -> Self {
        Self::TypeMismatch {
            context: context.into(),
            expected: expected.into(),
            found: kind_of(found).to_string(),
        }
    }
}

/// JSON kind name used in mismatch messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result alias for scaffold operations.
pub type EvalResult<T> = Result<T, EvalError>;
