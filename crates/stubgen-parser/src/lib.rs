//! stubgen parser: turns DSL type strings into [`TypeExpr`] values and raw
//! function signatures into validated [`Signature`]s.

mod parse_type;
mod parser;
mod reserved;
mod validate;

pub use parser::{ParseResult, Parser};
pub use reserved::{
    is_inherited_method, is_scaffold_name, reserved_in, INHERITED_METHODS, SCAFFOLD_NAMES,
};
pub use validate::{is_identifier, validate_signature};

use stubgen_lexer::Lexer;
use stubgen_types::ast::TypeExpr;
use stubgen_types::Diagnostics;

/// Parse one DSL type expression.
pub fn parse_type(source: &str) -> Result<TypeExpr, Diagnostics> {
    parse_type_in(source, "")
}

/// Parse one DSL type expression, labelling errors with `context`
/// (e.g. `parameters[0].type`).
pub fn parse_type_in(source: &str, context: &str) -> Result<TypeExpr, Diagnostics> {
    let lex = Lexer::new(source).with_context(context).lex();
    if lex.errors.has_errors() {
        return Err(lex.errors);
    }
    let result = Parser::new(lex.tokens, source).with_context(context).parse();
    match result.ty {
        Some(ty) if !result.errors.has_errors() => Ok(ty),
        _ => Err(result.errors),
    }
}
