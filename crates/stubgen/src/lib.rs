//! stubgen: orchestrates the full template-generation pipeline.
//!
//! ```text
//! language id → Language → FunctionSignature → validate/parse → Signature → Generator → program text
//! ```
//!
//! The language is resolved first, so an unsupported language is reported
//! before anything about the signature. Generation is all-or-nothing: a
//! request either yields a complete program or a structured error.

pub mod error;
pub mod models;
pub mod reference;

use sha2::{Digest, Sha256};
use stubgen_codegen::Generator;
use stubgen_types::ast::{FunctionSignature, Signature};
use stubgen_types::{Diagnostics, Language};
use tracing::{debug, warn};

pub use error::GenerateError;
pub use models::{TemplateRequest, TemplateResponse, TemplateResult};
pub use reference::{list_supported_languages, list_supported_types, LanguageInfo, SupportedTypes};
pub use stubgen_types::{ErrorCode, StubError};

/// Resolve a language id, rejecting ids outside the supported set (E400).
pub fn resolve_language(language: &str) -> Result<Language, GenerateError> {
    stubgen_codegen::resolve(language)
        .map(|generator| generator.language())
        .map_err(|error| {
            let code = error.code;
            warn!(code = %code, "Rejected language '{}'", language);
            GenerateError::UnsupportedLanguage(error)
        })
}

/// Validate a raw signature and parse every type in it.
pub fn validate(signature: &FunctionSignature) -> Result<Signature, GenerateError> {
    stubgen_parser::validate_signature(signature).map_err(|diagnostics| {
        let total = diagnostics.total_errors;
        let error = GenerateError::from_diagnostics(diagnostics);
        let code = error.code().map(|c| c.to_string()).unwrap_or_default();
        warn!(
            code = %code,
            errors = total,
            "Rejected signature for '{}'",
            signature.function_name
        );
        error
    })
}

/// Generate a program skeleton for `signature` in `language`.
pub fn generate(signature: &FunctionSignature, language: Language) -> Result<String, GenerateError> {
    let validated = validate(signature)?;
    debug!(
        "Validated '{}': {} parameters, returns {}",
        validated.function_name,
        validated.parameters.len(),
        validated.returns
    );
    Ok(Generator::for_language(language).generate(&validated))
}

/// Generate a program skeleton for a language given by id
/// (`python`, `java`, `cpp`, `javascript`).
pub fn generate_template(
    signature: &FunctionSignature,
    language: &str,
) -> Result<String, GenerateError> {
    let language = resolve_language(language)?;
    debug!("Resolved language {}", language.display_name());
    generate(signature, language)
}

/// Serve a [`TemplateRequest`], returning a serializable [`TemplateResult`].
pub fn generate_to_result(request: &TemplateRequest) -> TemplateResult {
    debug!("Template request '{}' ({})", request.question_id, request.language);
    match generate_template(&request.signature, &request.language) {
        Ok(template) => TemplateResult {
            success: true,
            language: request.language.clone(),
            template_sha256: Some(template_hash(&template)),
            template: Some(template),
            errors: Diagnostics::empty(),
        },
        Err(error) => TemplateResult {
            success: false,
            language: request.language.clone(),
            template: None,
            template_sha256: None,
            errors: error.diagnostics(),
        },
    }
}

/// Native spelling of a single DSL type expression in `language`.
pub fn map_type(type_expr: &str, language: &str) -> Result<String, GenerateError> {
    let generator = stubgen_codegen::resolve(language).map_err(GenerateError::UnsupportedLanguage)?;
    let ty = stubgen_parser::parse_type(type_expr).map_err(GenerateError::UnmappableType)?;
    Ok(generator.map_type(&ty))
}

/// Lowercase hex SHA-256 of a generated template.
pub fn template_hash(template: &str) -> String {
    format!("{:x}", Sha256::digest(template.as_bytes()))
}
