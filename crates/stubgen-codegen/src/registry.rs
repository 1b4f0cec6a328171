//! Generator registry: one closed variant per supported language.

use std::collections::BTreeSet;
use std::str::FromStr;

use stubgen_types::ast::{Signature, TypeExpr};
use stubgen_types::{ErrorCode, Language, StubError};
use tracing::debug;

use crate::cpp::CppGenerator;
use crate::java::JavaGenerator;
use crate::javascript::JavaScriptGenerator;
use crate::mapper::TypeMapper;
use crate::python::PythonGenerator;
use crate::template::TemplateGenerator;

/// A template generator for one of the supported languages.
#[derive(Debug, Clone, Copy)]
pub enum Generator {
    Python(PythonGenerator),
    Java(JavaGenerator),
    Cpp(CppGenerator),
    JavaScript(JavaScriptGenerator),
}

/// Dispatch `$body` to the generator inside any variant.
macro_rules! dispatch {
    ($self:expr, $gen:ident => $body:expr) => {
        match $self {
            Generator::Python($gen) => $body,
            Generator::Java($gen) => $body,
            Generator::Cpp($gen) => $body,
            Generator::JavaScript($gen) => $body,
        }
    };
}

impl Generator {
    /// The generator for `language`.
    pub fn for_language(language: Language) -> Generator {
        match language {
            Language::Python => Generator::Python(PythonGenerator::new()),
            Language::Java => Generator::Java(JavaGenerator::new()),
            Language::Cpp => Generator::Cpp(CppGenerator::new()),
            Language::JavaScript => Generator::JavaScript(JavaScriptGenerator::new()),
        }
    }

    /// The language this generator emits.
    pub fn language(&self) -> Language {
        dispatch!(self, g => g.mapper().language())
    }

    /// Render a complete program for `signature`.
    pub fn generate(&self, signature: &Signature) -> String {
        let template = dispatch!(self, g => g.generate(signature));
        debug!(
            "Generated {} template for '{}' ({} parameters, {} bytes)",
            self.language(),
            signature.function_name,
            signature.parameters.len(),
            template.len()
        );
        template
    }

    /// Native spelling of one DSL type.
    pub fn map_type(&self, ty: &TypeExpr) -> String {
        dispatch!(self, g => g.mapper().map_type(ty))
    }

    /// Import lines the types of `signature` need from the type mapper.
    pub fn imports(&self, signature: &Signature) -> BTreeSet<String> {
        dispatch!(self, g => g.mapper().imports(signature.all_types()))
    }
}

/// Look up the generator for a language id (`python`, `java`, `cpp`,
/// `javascript`).
pub fn resolve(language_id: &str) -> Result<Generator, StubError> {
    match Language::from_str(language_id) {
        Ok(language) => Ok(Generator::for_language(language)),
        Err(err) => {
            let supported: Vec<&str> = Language::ALL.iter().map(|l| l.id()).collect();
            Err(StubError::new(
                ErrorCode::UNSUPPORTED_LANGUAGE,
                err.to_string(),
                "language",
                language_id,
            )
            .with_suggestion(format!("supported languages: {}", supported.join(", "))))
        }
    }
}

/// Every registered generator, in canonical language order.
pub fn all() -> impl Iterator<Item = Generator> {
    Language::ALL.into_iter().map(Generator::for_language)
}
