//! Top-level generation error.

use stubgen_types::{Diagnostics, ErrorCategory, ErrorCode, StubError};
use thiserror::Error;

/// Why a template could not be generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// The language id is outside the supported set.
    #[error("{0}")]
    UnsupportedLanguage(StubError),
    /// A type expression is outside the DSL grammar.
    #[error("unmappable type:\n{0}")]
    UnmappableType(Diagnostics),
    /// The function or parameter names are unusable.
    #[error("invalid signature:\n{0}")]
    InvalidSignature(Diagnostics),
}

impl GenerateError {
    /// Classify validation diagnostics. Name problems win over type problems.
    pub fn from_diagnostics(diagnostics: Diagnostics) -> Self {
        let signature_error = diagnostics
            .errors
            .iter()
            .any(|e| e.category == ErrorCategory::Signature);
        if signature_error {
            Self::InvalidSignature(diagnostics)
        } else {
            Self::UnmappableType(diagnostics)
        }
    }

    /// Every underlying error as one collection.
    pub fn diagnostics(&self) -> Diagnostics {
        match self {
            Self::UnsupportedLanguage(error) => Diagnostics::single(error.clone()),
            Self::UnmappableType(d) | Self::InvalidSignature(d) => d.clone(),
        }
    }

    /// Code of the first reported error.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::UnsupportedLanguage(error) => Some(error.code),
            Self::UnmappableType(d) | Self::InvalidSignature(d) => d.first().map(|e| e.code),
        }
    }
}

impl From<StubError> for GenerateError {
    fn from(error: StubError) -> Self {
        if error.code == ErrorCode::UNSUPPORTED_LANGUAGE {
            Self::UnsupportedLanguage(error)
        } else {
            Self::from_diagnostics(Diagnostics::single(error))
        }
    }
}

impl From<Diagnostics> for GenerateError {
    fn from(diagnostics: Diagnostics) -> Self {
        Self::from_diagnostics(diagnostics)
    }
}
