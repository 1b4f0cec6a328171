//! Signature validation: raw [`FunctionSignature`] to typed [`Signature`].
//!
//! Every check runs and every problem is reported, so a caller sees all
//! the bad parameters of a request at once rather than one per round trip.

use std::collections::HashMap;

use stubgen_types::ast::{FunctionSignature, Signature, TypeExpr, TypedParameter};
use stubgen_types::{Diagnostics, ErrorCode, StubError};

use crate::reserved::{is_inherited_method, is_scaffold_name, reserved_in};

/// Returns `true` for `[A-Za-z_][A-Za-z0-9_]*`, the identifier syntax shared
/// by every target language.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a raw signature and parse all of its types.
pub fn validate_signature(raw: &FunctionSignature) -> Result<Signature, Diagnostics> {
    let mut errors = Diagnostics::empty();

    if raw.function_name.trim().is_empty() {
        errors.push_error(StubError::new(
            ErrorCode::EMPTY_FUNCTION_NAME,
            "function name cannot be empty",
            "function_name",
            raw.function_name.as_str(),
        ));
    } else if let Some(err) = check_identifier(&raw.function_name, "function_name", "function") {
        errors.push_error(err);
    } else if is_inherited_method(&raw.function_name) {
        errors.push_error(
            StubError::new(
                ErrorCode::INVALID_IDENTIFIER,
                format!(
                    "'{}' would redefine a method the generated class inherits",
                    raw.function_name
                ),
                "function_name",
                raw.function_name.as_str(),
            )
            .with_suggestion("choose a different function name"),
        );
    }

    let mut parameters = Vec::with_capacity(raw.parameters.len());
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, param) in raw.parameters.iter().enumerate() {
        let name_ctx = format!("parameters[{i}].name");
        if param.name.trim().is_empty() {
            errors.push_error(StubError::new(
                ErrorCode::EMPTY_PARAMETER_NAME,
                "parameter name cannot be empty",
                name_ctx,
                param.name.as_str(),
            ));
        } else if let Some(err) = check_identifier(&param.name, &name_ctx, "parameter") {
            errors.push_error(err);
        } else if param.name == raw.function_name {
            errors.push_error(
                StubError::new(
                    ErrorCode::DUPLICATE_PARAMETER,
                    format!("parameter '{}' shadows the function name", param.name),
                    name_ctx,
                    param.name.as_str(),
                )
                .with_suggestion("rename the parameter"),
            );
        } else if let Some(first) = seen.insert(param.name.as_str(), i) {
            // keep pointing at the first declaration
            seen.insert(param.name.as_str(), first);
            errors.push_error(
                StubError::new(
                    ErrorCode::DUPLICATE_PARAMETER,
                    format!("duplicate parameter name '{}'", param.name),
                    name_ctx,
                    param.name.as_str(),
                )
                .with_suggestion(format!("first declared as parameters[{first}]")),
            );
        }

        let type_ctx = format!("parameters[{i}].type");
        if let Some(ty) = parse_checked(&param.ty, &type_ctx, &mut errors) {
            parameters.push(TypedParameter {
                name: param.name.clone(),
                ty,
            });
        }
    }

    let returns = parse_checked(&raw.returns.ty, "returns.type", &mut errors);

    match returns {
        Some(returns) if !errors.has_errors() => Ok(Signature {
            function_name: raw.function_name.clone(),
            parameters,
            returns,
        }),
        _ => Err(errors),
    }
}

/// Parse one type string, recording any errors.
fn parse_checked(source: &str, context: &str, errors: &mut Diagnostics) -> Option<TypeExpr> {
    if source.trim().is_empty() {
        errors.push_error(StubError::new(
            ErrorCode::EMPTY_TYPE,
            "type cannot be empty",
            context,
            source,
        ));
        return None;
    }
    match crate::parse_type_in(source, context) {
        Ok(ty) => Some(ty),
        Err(diagnostics) => {
            errors.extend(diagnostics);
            None
        }
    }
}

fn check_identifier(name: &str, context: &str, what: &str) -> Option<StubError> {
    if !is_identifier(name) {
        return Some(
            StubError::new(
                ErrorCode::INVALID_IDENTIFIER,
                format!("'{name}' is not a valid {what} name"),
                context,
                name,
            )
            .with_suggestion("use letters, digits and '_', not starting with a digit"),
        );
    }
    let reserved = reserved_in(name);
    if !reserved.is_empty() {
        let langs: Vec<&str> = reserved.iter().map(|l| l.display_name()).collect();
        return Some(StubError::new(
            ErrorCode::INVALID_IDENTIFIER,
            format!("'{name}' is a reserved word in {}", langs.join(", ")),
            context,
            name,
        ));
    }
    if is_scaffold_name(name) {
        return Some(StubError::new(
            ErrorCode::INVALID_IDENTIFIER,
            format!("'{name}' is already declared by the generated program"),
            context,
            name,
        ));
    }
    None
}
