//! Serde request/response models.

use serde::{Deserialize, Serialize};
use stubgen_types::ast::FunctionSignature;
use stubgen_types::Diagnostics;

/// A template request as posted by a question editor.
///
/// ```json
/// {
///   "question_id": "two-sum",
///   "title": "Two Sum",
///   "description": "Return indices of the two numbers adding up to target.",
///   "signature": {
///     "function_name": "twoSum",
///     "parameters": [{ "name": "nums", "type": "int[]" }, { "name": "target", "type": "int" }],
///     "returns": { "type": "int[]" }
///   },
///   "language": "python"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRequest {
    pub question_id: String,
    pub title: String,
    pub description: String,
    pub signature: FunctionSignature,
    /// Language id; kept as text so unknown ids surface as E400.
    pub language: String,
}

/// A generated template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResponse {
    pub language: String,
    pub template: String,
}

/// Result of a generation request, always serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateResult {
    /// Whether a template was produced.
    pub success: bool,
    /// The requested language id, echoed back.
    pub language: String,
    /// The generated program (present only on success).
    pub template: Option<String>,
    /// Hex SHA-256 of `template` (present only on success).
    pub template_sha256: Option<String>,
    /// Structured errors; empty on success.
    pub errors: Diagnostics,
}

impl TemplateResult {
    /// The success payload as a response, if any.
    pub fn response(&self) -> Option<TemplateResponse> {
        self.template.as_ref().map(|template| TemplateResponse {
            language: self.language.clone(),
            template: template.clone(),
        })
    }
}
