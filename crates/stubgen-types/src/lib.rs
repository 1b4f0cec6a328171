//! Shared types for stubgen.
//!
//! This crate defines the DSL type expressions, function signatures,
//! the closed set of target languages, source spans and the structured
//! error types used across every stage of template generation.

mod error;
mod language;
mod span;
pub mod ast;

pub use error::{Diagnostics, ErrorCategory, ErrorCode, StubError, MAX_ERRORS};
pub use language::{Language, UnknownLanguage};
pub use span::Span;

/// Maximum nesting depth of a DSL type expression (`List<List<...>>`).
pub const MAX_TYPE_DEPTH: u32 = 16;

/// Result type used throughout stubgen.
pub type Result<T> = std::result::Result<T, StubError>;
