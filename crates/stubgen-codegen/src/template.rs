//! Shared template-assembly helpers.
//!
//! Programs are assembled from `indoc!` blocks whose `#PLACEHOLDER` markers
//! are substituted in order, then joined into blank-line separated sections.

use stubgen_types::ast::{Signature, TypeExpr};

use crate::mapper::TypeMapper;

/// Turns a validated signature into a complete program in one language.
pub trait TemplateGenerator {
    type Mapper: TypeMapper;

    /// The type mapper this generator renders types with.
    fn mapper(&self) -> &Self::Mapper;

    /// Render the full program. Never fails on a validated signature.
    fn generate(&self, signature: &Signature) -> String;
}

/// Substitute each `(placeholder, value)` pair in order.
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter()
        .fold(template.to_string(), |code, (key, value)| code.replace(key, value))
}

/// Prefix every non-blank line of `block` with `prefix`.
pub(crate) fn indent(block: &str, prefix: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join non-empty sections with `separator`, ending with one newline.
pub(crate) fn assemble(sections: &[String], separator: &str) -> String {
    let mut out = sections
        .iter()
        .map(|s| s.trim_end())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator);
    out.push('\n');
    out
}

/// A top-level graph appears among the parameters or the return type.
pub(crate) fn uses_graph(signature: &Signature) -> bool {
    signature.all_types().any(|t| matches!(t, TypeExpr::Graph))
}

/// Comma-separated parameter names, in declaration order.
pub(crate) fn argument_list(signature: &Signature) -> String {
    signature.parameter_names().collect::<Vec<_>>().join(", ")
}
