use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of errors reported for a single request.
pub const MAX_ERRORS: usize = 20;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Syntax,
    Type,
    Signature,
    Language,
    Structure,
}

/// Numeric error code (E100–E699).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Syntax errors (E100–E199) ──
    pub const UNEXPECTED_TOKEN: Self = Self(100);
    pub const UNCLOSED_ANGLE: Self = Self(101);
    pub const INVALID_CHARACTER: Self = Self(102);
    pub const TRAILING_INPUT: Self = Self(103);

    // ── Type errors (E200–E299) ──
    pub const UNKNOWN_TYPE: Self = Self(200);
    pub const NESTED_ARRAY: Self = Self(201);
    pub const PARAMETERIZED_GRAPH: Self = Self(202);
    pub const NESTED_TREE: Self = Self(203);
    pub const NESTED_GRAPH: Self = Self(204);

    // ── Signature errors (E300–E399) ──
    pub const EMPTY_FUNCTION_NAME: Self = Self(300);
    pub const EMPTY_PARAMETER_NAME: Self = Self(301);
    pub const EMPTY_TYPE: Self = Self(302);
    pub const INVALID_IDENTIFIER: Self = Self(303);
    pub const DUPLICATE_PARAMETER: Self = Self(304);

    // ── Language errors (E400–E499) ──
    pub const UNSUPPORTED_LANGUAGE: Self = Self(400);

    // ── Structure errors (E600–E699) ──
    pub const NESTING_LIMIT_EXCEEDED: Self = Self(600);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Syntax,
            200..=299 => ErrorCategory::Type,
            300..=399 => ErrorCategory::Signature,
            400..=499 => ErrorCategory::Language,
            600..=699 => ErrorCategory::Structure,
            _ => ErrorCategory::Syntax, // fallback
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A structured stubgen error.
///
/// Callers render these as-is; they must not parse the message text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StubError {
    /// Error code (e.g., E200).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Where in the request the error was found, e.g. `parameters[1].type`.
    pub context: String,
    /// The offending input text (a type expression, a name, a language id).
    pub source: String,
    /// Byte range inside `source`, when the error points at part of it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl StubError {
    /// Create a new error.
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        context: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            context: context.into(),
            source: source.into(),
            span: None,
            suggestion: None,
        }
    }

    /// Attach a byte span inside `source`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for StubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{} [{}] {}", self.code, self.category, self.message)
        } else {
            write!(
                f,
                "{}: {} [{}] {}",
                self.context, self.code, self.category, self.message
            )
        }
    }
}

impl std::error::Error for StubError {}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Type => write!(f, "type"),
            Self::Signature => write!(f, "signature"),
            Self::Language => write!(f, "language"),
            Self::Structure => write!(f, "structure"),
        }
    }
}

/// A bounded collection of errors for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub errors: Vec<StubError>,
    pub total_errors: usize,
}

impl Diagnostics {
    /// Create an empty result (no errors).
    pub fn empty() -> Self {
        Self {
            errors: Vec::new(),
            total_errors: 0,
        }
    }

    /// Wrap a single error.
    pub fn single(error: StubError) -> Self {
        let mut diagnostics = Self::empty();
        diagnostics.push_error(error);
        diagnostics
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Add an error, respecting the MAX_ERRORS limit.
    pub fn push_error(&mut self, error: StubError) {
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        }
        self.total_errors += 1;
    }

    /// Move every error of `other` into `self`.
    pub fn extend(&mut self, other: Diagnostics) {
        // errors already dropped by `other`'s own cap still count
        let dropped = other.total_errors.saturating_sub(other.errors.len());
        for error in other.errors {
            self.push_error(error);
        }
        self.total_errors += dropped;
    }

    /// Returns `true` if any stored error carries `code`.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// The first stored error, if any.
    pub fn first(&self) -> Option<&StubError> {
        self.errors.first()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        if self.total_errors > self.errors.len() {
            write!(
                f,
                "\n... and {} more",
                self.total_errors - self.errors.len()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_category() {
        assert_eq!(
            ErrorCode::UNEXPECTED_TOKEN.category(),
            ErrorCategory::Syntax
        );
        assert_eq!(ErrorCode::UNKNOWN_TYPE.category(), ErrorCategory::Type);
        assert_eq!(
            ErrorCode::DUPLICATE_PARAMETER.category(),
            ErrorCategory::Signature
        );
        assert_eq!(
            ErrorCode::UNSUPPORTED_LANGUAGE.category(),
            ErrorCategory::Language
        );
        assert_eq!(
            ErrorCode::NESTING_LIMIT_EXCEEDED.category(),
            ErrorCategory::Structure
        );
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::UNKNOWN_TYPE), "E200");
        assert_eq!(format!("{}", ErrorCode::UNSUPPORTED_LANGUAGE), "E400");
    }

    #[test]
    fn test_stub_error_creation() {
        let err = StubError::new(
            ErrorCode::UNKNOWN_TYPE,
            "unknown type 'integer'",
            "parameters[0].type",
            "integer",
        );
        assert_eq!(err.code, ErrorCode::UNKNOWN_TYPE);
        assert_eq!(err.category, ErrorCategory::Type);
        assert!(err.span.is_none());
    }

    #[test]
    fn test_stub_error_display() {
        let err = StubError::new(
            ErrorCode::EMPTY_FUNCTION_NAME,
            "function name cannot be empty",
            "function_name",
            "",
        );
        assert_eq!(
            err.to_string(),
            "function_name: E300 [signature] function name cannot be empty"
        );

        let bare = StubError::new(ErrorCode::UNSUPPORTED_LANGUAGE, "unsupported language: go", "", "go");
        assert_eq!(bare.to_string(), "E400 [language] unsupported language: go");
    }

    #[test]
    fn test_stub_error_json_serialization() {
        let err = StubError::new(
            ErrorCode::UNKNOWN_TYPE,
            "unknown type 'integer'",
            "returns.type",
            "List<integer>",
        )
        .with_span(Span::new(5, 12))
        .with_suggestion("use one of: int, long, float, double, bool, string");

        let json = serde_json::to_string_pretty(&err).unwrap();
        assert!(json.contains("\"code\""));
        assert!(json.contains("\"context\""));
        assert!(json.contains("\"suggestion\""));
        assert!(json.contains("\"start\""));

        let deserialized: StubError = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, err);
    }

    #[test]
    fn test_optional_fields_skipped() {
        let err = StubError::new(ErrorCode::EMPTY_TYPE, "type cannot be empty", "returns.type", "");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("\"span\""));
        assert!(!json.contains("\"suggestion\""));
    }

    #[test]
    fn test_diagnostics_max_limit() {
        let mut diags = Diagnostics::empty();
        for i in 0..25 {
            diags.push_error(StubError::new(
                ErrorCode::EMPTY_PARAMETER_NAME,
                format!("Error {i}"),
                format!("parameters[{i}].name"),
                "",
            ));
        }
        assert_eq!(diags.errors.len(), 20);
        assert_eq!(diags.total_errors, 25);
        assert!(diags.has_errors());
        assert!(diags.to_string().ends_with("... and 5 more"));
    }

    #[test]
    fn test_diagnostics_extend_keeps_totals() {
        let mut a = Diagnostics::single(StubError::new(ErrorCode::EMPTY_TYPE, "a", "x", ""));
        let mut b = Diagnostics::empty();
        b.push_error(StubError::new(ErrorCode::UNKNOWN_TYPE, "b", "y", "q"));
        a.extend(b);
        assert_eq!(a.total_errors, 2);
        assert!(a.contains(ErrorCode::UNKNOWN_TYPE));
        assert_eq!(a.first().map(|e| e.code), Some(ErrorCode::EMPTY_TYPE));
    }

    #[test]
    fn test_diagnostics_empty() {
        let diags = Diagnostics::empty();
        assert!(!diags.has_errors());
        assert_eq!(diags.total_errors, 0);
        assert_eq!(diags.to_string(), "");
    }

    #[test]
    fn test_error_determinism_100_iterations() {
        let build = || {
            StubError::new(
                ErrorCode::NESTED_ARRAY,
                "arrays cannot be nested",
                "parameters[0].type",
                "int[][]",
            )
            .with_span(Span::new(3, 7))
        };
        let first_json = serde_json::to_string(&build()).unwrap();
        for i in 0..100 {
            let json = serde_json::to_string(&build()).unwrap();
            assert_eq!(first_json, json, "Determinism failure at iteration {i}");
        }
    }
}
