//! Signature validation tests.
//!
//! Covers: lowering of well-formed signatures, every signature-level error
//! (E300–E304), error context paths, collection of several errors in one
//! pass, and determinism.

use stubgen_parser::validate_signature;
use stubgen_types::ast::{FunctionSignature, Parameter, Primitive, TypeExpr};
use stubgen_types::{Diagnostics, ErrorCode};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn sig(name: &str, params: &[(&str, &str)], returns: &str) -> FunctionSignature {
    FunctionSignature::new(
        name,
        params.iter().map(|(n, t)| Parameter::new(*n, *t)).collect(),
        returns,
    )
}

fn errors_of(raw: &FunctionSignature) -> Diagnostics {
    match validate_signature(raw) {
        Ok(sig) => panic!("expected validation to fail, got {sig:?}"),
        Err(errors) => errors,
    }
}

fn contexts(errors: &Diagnostics) -> Vec<&str> {
    errors.errors.iter().map(|e| e.context.as_str()).collect()
}

// ─────────────────────────────────────────────────────────────────────
// Valid signatures
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_two_sum_lowers() {
    let raw = sig("twoSum", &[("nums", "int[]"), ("target", "int")], "int[]");
    let typed = validate_signature(&raw).expect("valid");
    assert_eq!(typed.function_name, "twoSum");
    assert_eq!(typed.parameters.len(), 2);
    assert_eq!(typed.parameters[0].name, "nums");
    assert_eq!(typed.parameters[0].ty, TypeExpr::Array(Primitive::Int));
    assert_eq!(typed.parameters[1].ty, TypeExpr::Primitive(Primitive::Int));
    assert_eq!(typed.returns, TypeExpr::Array(Primitive::Int));
}

#[test]
fn test_zero_parameters() {
    let typed = validate_signature(&sig("answer", &[], "int")).expect("valid");
    assert!(typed.parameters.is_empty());
}

#[test]
fn test_tree_signature() {
    let raw = sig("maxDepth", &[("root", "Tree<int>")], "int");
    let typed = validate_signature(&raw).expect("valid");
    assert!(typed.uses_tree());
}

// ─────────────────────────────────────────────────────────────────────
// Signature errors
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_function_name() {
    let errors = errors_of(&sig("", &[], "int"));
    assert_eq!(errors.first().map(|e| e.code), Some(ErrorCode::EMPTY_FUNCTION_NAME));
    assert_eq!(contexts(&errors), vec!["function_name"]);
}

#[test]
fn test_whitespace_function_name_is_empty() {
    let errors = errors_of(&sig("   ", &[], "int"));
    assert!(errors.contains(ErrorCode::EMPTY_FUNCTION_NAME));
}

#[test]
fn test_invalid_function_name() {
    let errors = errors_of(&sig("two-sum", &[], "int"));
    assert!(errors.contains(ErrorCode::INVALID_IDENTIFIER));
}

#[test]
fn test_reserved_function_name() {
    let errors = errors_of(&sig("delete", &[], "int"));
    let err = errors.first().expect("error");
    assert_eq!(err.code, ErrorCode::INVALID_IDENTIFIER);
    assert!(err.message.contains("C++20"));
    assert!(err.message.contains("JavaScript"));
}

#[test]
fn test_empty_parameter_name() {
    let errors = errors_of(&sig("f", &[("", "int")], "int"));
    assert_eq!(errors.first().map(|e| e.code), Some(ErrorCode::EMPTY_PARAMETER_NAME));
    assert_eq!(contexts(&errors), vec!["parameters[0].name"]);
}

#[test]
fn test_scaffold_parameter_name() {
    let errors = errors_of(&sig("f", &[("data", "int")], "int"));
    assert!(errors.contains(ErrorCode::INVALID_IDENTIFIER));
}

#[test]
fn test_duplicate_parameter() {
    let errors = errors_of(&sig("f", &[("a", "int"), ("b", "int"), ("a", "int")], "int"));
    let err = errors.first().expect("error");
    assert_eq!(err.code, ErrorCode::DUPLICATE_PARAMETER);
    assert_eq!(err.context, "parameters[2].name");
    assert_eq!(err.suggestion.as_deref(), Some("first declared as parameters[0]"));
}

#[test]
fn test_parameter_shadowing_function_name() {
    let errors = errors_of(&sig("count", &[("count", "int")], "int"));
    let err = errors.first().expect("error");
    assert_eq!(err.code, ErrorCode::DUPLICATE_PARAMETER);
    assert_eq!(err.context, "parameters[0].name");
}

#[test]
fn test_runtime_names_are_taken() {
    for name in ["print", "cout", "System", "JSON"] {
        let errors = errors_of(&sig("f", &[(name, "int")], "int"));
        assert!(errors.contains(ErrorCode::INVALID_IDENTIFIER), "{name}");
    }
}

#[test]
fn test_inherited_method_names_are_rejected() {
    let names = [
        "getClass", "hashCode", "equals", "toString", "clone", "finalize", "wait", "notify",
        "notifyAll", "__init__", "__str__",
    ];
    for name in names {
        let errors = errors_of(&sig(name, &[], "int"));
        let err = errors.first().expect("error");
        assert_eq!(err.code, ErrorCode::INVALID_IDENTIFIER, "{name}");
        assert_eq!(err.context, "function_name", "{name}");
    }
}

#[test]
fn test_inherited_method_names_are_fine_as_parameters() {
    let raw = sig("compare", &[("equals", "bool"), ("hashCode", "int")], "bool");
    assert!(validate_signature(&raw).is_ok());
}

#[test]
fn test_empty_type() {
    let errors = errors_of(&sig("f", &[("x", "")], "int"));
    assert_eq!(errors.first().map(|e| e.code), Some(ErrorCode::EMPTY_TYPE));
    assert_eq!(contexts(&errors), vec!["parameters[0].type"]);

    let errors = errors_of(&sig("f", &[], " "));
    assert_eq!(contexts(&errors), vec!["returns.type"]);
}

#[test]
fn test_unmappable_parameter_type_has_context() {
    let errors = errors_of(&sig("f", &[("a", "int"), ("b", "Map<int>")], "int"));
    let err = errors.first().expect("error");
    assert_eq!(err.code, ErrorCode::UNKNOWN_TYPE);
    assert_eq!(err.context, "parameters[1].type");
}

#[test]
fn test_unmappable_return_type() {
    let errors = errors_of(&sig("f", &[], "Graph<int>"));
    let err = errors.first().expect("error");
    assert_eq!(err.code, ErrorCode::PARAMETERIZED_GRAPH);
    assert_eq!(err.context, "returns.type");
}

#[test]
fn test_all_errors_collected() {
    let raw = sig("", &[("x", "integer"), ("", "int"), ("y", "int[][]")], "Tree<Graph");
    let errors = errors_of(&raw);
    assert_eq!(errors.total_errors, 5);
    assert_eq!(
        contexts(&errors),
        vec![
            "function_name",
            "parameters[0].type",
            "parameters[1].name",
            "parameters[2].type",
            "returns.type",
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_validation_determinism_100_iterations() {
    let raw = sig("f", &[("a", "List<int[]>"), ("a", "Foo")], "Tree<int>");
    let first = validate_signature(&raw);
    for i in 0..100 {
        assert_eq!(first, validate_signature(&raw), "Determinism failure at iteration {i}");
    }
}
