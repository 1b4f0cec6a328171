//! End-to-end pipeline tests.
//!
//! Tests validate:
//! - The fibonacci and twoSum scenarios in every language
//! - Primitive and nested mapping through `map_type`
//! - Error ordering: unsupported language before signature problems
//! - Classification into InvalidSignature / UnmappableType
//! - `generate_to_result` JSON envelope and template hash
//! - Determinism of templates and error JSON

use serde_json::json;
use stubgen::{
    generate, generate_template, generate_to_result, list_supported_languages, map_type,
    template_hash, validate, ErrorCode, GenerateError, TemplateRequest, TemplateResult,
};
use stubgen_eval::{run_scaffold, Argument};
use stubgen_types::ast::{FunctionSignature, Parameter};
use stubgen_types::Language;

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn sig(name: &str, params: &[(&str, &str)], returns: &str) -> FunctionSignature {
    FunctionSignature::new(
        name,
        params.iter().map(|(n, t)| Parameter::new(*n, *t)).collect(),
        returns,
    )
}

fn fibonacci() -> FunctionSignature {
    sig("fibonacci", &[("n", "int")], "int")
}

fn two_sum() -> FunctionSignature {
    sig("twoSum", &[("nums", "int[]"), ("target", "int")], "int[]")
}

fn request(signature: FunctionSignature, language: &str) -> TemplateRequest {
    TemplateRequest {
        question_id: "q-1".to_string(),
        title: "Question".to_string(),
        description: "Solve it.".to_string(),
        signature,
        language: language.to_string(),
    }
}

fn template(signature: &FunctionSignature, language: &str) -> String {
    generate_template(signature, language).unwrap_or_else(|e| panic!("generation failed: {e}"))
}

// ══════════════════════════════════════════════════════════════════════════════
// 1. Scenarios
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn fibonacci_in_every_language() {
    let cases = [
        ("python", "def fibonacci(self, n: int) -> int:", "return 0"),
        ("java", "public int fibonacci(int n) {", "return 0;"),
        ("cpp", "int fibonacci(int n) {", "return 0;"),
        ("javascript", "function fibonacci(n) {", "return 0;"),
    ];
    for (language, stub, default) in cases {
        let code = template(&fibonacci(), language);
        assert!(code.contains(stub), "{language}: missing {stub:?}\n{code}");
        assert!(code.contains(default), "{language}: missing {default:?}\n{code}");
    }
}

#[test]
fn two_sum_in_every_language() {
    let cases = [
        ("python", "nums: List[int], target: int) -> List[int]:", "from typing import List"),
        ("java", "public int[] twoSum(int[] nums, int target) {", "import java.util.*;"),
        ("cpp", "vector<int> twoSum(vector<int> nums, int target) {", "#include <vector>"),
        ("javascript", " * @param {number[]} nums", " * @return {number[]}"),
    ];
    for (language, stub, support) in cases {
        let code = template(&two_sum(), language);
        assert!(code.contains(stub), "{language}: missing {stub:?}\n{code}");
        assert!(code.contains(support), "{language}: missing {support:?}\n{code}");
    }
}

#[test]
fn typed_entry_point_matches_string_entry_point() {
    for language in Language::ALL {
        assert_eq!(
            generate(&two_sum(), language).unwrap(),
            template(&two_sum(), language.id())
        );
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// 2. Type mapping
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn primitive_mapping_table() {
    let expected = [
        ("python", ["bool", "str", "int"]),
        ("java", ["boolean", "String", "int"]),
        ("cpp", ["bool", "string", "int"]),
        ("javascript", ["boolean", "string", "number"]),
    ];
    for (language, [b, s, i]) in expected {
        assert_eq!(map_type("bool", language).unwrap(), b);
        assert_eq!(map_type("string", language).unwrap(), s);
        assert_eq!(map_type("int", language).unwrap(), i);
    }
}

#[test]
fn nested_mapping_is_not_flattened() {
    assert_eq!(map_type("List<int[]>", "python").unwrap(), "List[List[int]]");
    assert_eq!(map_type("List<int[]>", "java").unwrap(), "List<int[]>");
    assert_eq!(map_type("List<int[]>", "cpp").unwrap(), "vector<vector<int>>");
    assert_eq!(map_type("List<int[]>", "javascript").unwrap(), "number[][]");
}

#[test]
fn map_type_errors() {
    assert!(matches!(
        map_type("int", "go"),
        Err(GenerateError::UnsupportedLanguage(_))
    ));
    let err = map_type("Integer", "python").unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::UNKNOWN_TYPE));
    assert!(matches!(err, GenerateError::UnmappableType(_)));
}

// ══════════════════════════════════════════════════════════════════════════════
// 3. Errors
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn unsupported_language_returns_no_text() {
    let err = generate_template(&fibonacci(), "ruby").unwrap_err();
    match &err {
        GenerateError::UnsupportedLanguage(e) => {
            assert_eq!(e.code, ErrorCode::UNSUPPORTED_LANGUAGE);
            assert_eq!(e.source, "ruby");
        }
        other => panic!("expected UnsupportedLanguage, got {other:?}"),
    }
    let result = generate_to_result(&request(fibonacci(), "ruby"));
    assert!(!result.success);
    assert!(result.template.is_none());
    assert!(result.template_sha256.is_none());
}

#[test]
fn language_is_checked_before_signature() {
    let broken = sig("", &[("", "Integer")], "");
    let err = generate_template(&broken, "kotlin").unwrap_err();
    assert!(matches!(err, GenerateError::UnsupportedLanguage(_)));
}

#[test]
fn unknown_type_is_unmappable() {
    let err = generate_template(&sig("f", &[("x", "Map<int>")], "int"), "python").unwrap_err();
    match err {
        GenerateError::UnmappableType(d) => {
            assert_eq!(d.errors[0].code, ErrorCode::UNKNOWN_TYPE);
            assert_eq!(d.errors[0].context, "parameters[0].type");
        }
        other => panic!("expected UnmappableType, got {other:?}"),
    }
}

#[test]
fn name_problems_are_invalid_signature() {
    let err = generate_template(&sig("f", &[("class", "int")], "int"), "java").unwrap_err();
    assert!(matches!(err, GenerateError::InvalidSignature(_)));
    assert_eq!(err.code(), Some(ErrorCode::INVALID_IDENTIFIER));

    // mixed problems are reported together under the signature variant
    let err = validate(&sig("", &[("x", "Tree<Graph>")], "int")).unwrap_err();
    let diagnostics = err.diagnostics();
    assert!(matches!(err, GenerateError::InvalidSignature(_)));
    assert!(diagnostics.contains(ErrorCode::EMPTY_FUNCTION_NAME));
    assert!(diagnostics.contains(ErrorCode::NESTED_GRAPH));
}

#[test]
fn empty_return_type_is_rejected() {
    let err = generate_template(&sig("f", &[], "  "), "cpp").unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::EMPTY_TYPE));
}

#[test]
fn error_display_is_readable() {
    let err = generate_template(&fibonacci(), "ruby").unwrap_err();
    assert_eq!(
        err.to_string(),
        "language: E400 [language] unsupported language: ruby"
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// 4. Result envelope
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn success_result_json_shape() {
    let result = generate_to_result(&request(two_sum(), "javascript"));
    assert!(result.success);
    assert!(!result.errors.has_errors());
    let template = result.template.clone().unwrap();
    assert_eq!(result.template_sha256.as_deref(), Some(template_hash(&template).as_str()));

    let parsed = serde_json::to_value(&result).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["language"], "javascript");
    assert_eq!(parsed["errors"]["total_errors"], 0);

    let response = result.response().unwrap();
    assert_eq!(response.language, "javascript");
    assert_eq!(response.template, template);
}

#[test]
fn failure_result_json_shape() {
    let result = generate_to_result(&request(sig("f", &[("x", "int[][]")], "int"), "python"));
    let parsed = serde_json::to_value(&result).unwrap();
    assert_eq!(parsed["success"], false);
    assert!(parsed["template"].is_null());
    assert_eq!(parsed["errors"]["errors"][0]["code"], 201);
    assert_eq!(parsed["errors"]["errors"][0]["category"], "type");
    assert_eq!(parsed["errors"]["errors"][0]["context"], "parameters[0].type");
}

#[test]
fn result_json_roundtrip() {
    let result = generate_to_result(&request(fibonacci(), "cpp"));
    let text = serde_json::to_string(&result).unwrap();
    let rt: TemplateResult = serde_json::from_str(&text).unwrap();
    assert_eq!(rt, result);
}

#[test]
fn request_parses_from_wire_json() {
    let body = json!({
        "question_id": "two-sum",
        "title": "Two Sum",
        "description": "Find two numbers adding up to target.",
        "signature": {
            "function_name": "twoSum",
            "parameters": [
                { "name": "nums", "type": "int[]" },
                { "name": "target", "type": "int" }
            ],
            "returns": { "type": "int[]" }
        },
        "language": "java"
    });
    let request: TemplateRequest = serde_json::from_value(body).unwrap();
    assert_eq!(request.signature, two_sum());
    assert!(generate_to_result(&request).success);
}

#[test]
fn template_hash_is_hex_sha256() {
    let hash = template_hash("");
    assert_eq!(
        hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn languages_listing() {
    let languages = list_supported_languages();
    assert_eq!(languages.len(), 4);
    assert_eq!(languages[3].display_name, "JavaScript (Node 20)");
}

// ══════════════════════════════════════════════════════════════════════════════
// 5. Scaffold contract and determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn validated_signature_drives_reference_scaffold() {
    let signature = validate(&sig("maxDepth", &[("root", "Tree<int>")], "int")).unwrap();
    let out = run_scaffold(&signature, r#"{"root": [3, 9, 20, null, null, 15, 7]}"#, |args| {
        fn depth(node: Option<&stubgen_eval::TreeNode<serde_json::Value>>) -> i64 {
            node.map_or(0, |n| 1 + depth(n.left.as_deref()).max(depth(n.right.as_deref())))
        }
        let root = args[0].as_tree().unwrap();
        Ok(Argument::Json(json!(depth(root))))
    })
    .unwrap();
    assert_eq!(out, "3\n");
}

#[test]
fn templates_are_deterministic() {
    let signatures = [
        fibonacci(),
        two_sum(),
        sig("levels", &[("root", "Tree<string>")], "List<List<string>>"),
        sig("cloneGraph", &[("graph", "Graph")], "Graph"),
    ];
    for language in Language::ALL {
        for signature in &signatures {
            let first = template(signature, language.id());
            for _ in 0..100 {
                assert_eq!(template(signature, language.id()), first);
            }
        }
    }
}

#[test]
fn error_json_is_deterministic() {
    let broken = sig("f", &[("x", "List<Tree>"), ("x", "Graph<int>")], "Tree<int");
    let first = serde_json::to_string(&generate_to_result(&request(broken.clone(), "python"))).unwrap();
    for _ in 0..100 {
        let again = serde_json::to_string(&generate_to_result(&request(broken.clone(), "python")))
            .unwrap();
        assert_eq!(again, first);
    }
}
