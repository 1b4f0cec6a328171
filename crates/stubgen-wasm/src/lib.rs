//! stubgen as a WASM module for browser environments.
//!
//! This crate exposes template generation via `wasm-bindgen`, suitable for
//! running in a question editor's Web Worker. Every function takes and
//! returns plain strings; structured values travel as JSON.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { generate, map_type } from 'stubgen-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(generate(JSON.stringify(request)));
//! // { success: true, language: "python", template: "import json\n...", template_sha256: "...", errors: { ... } }
//!
//! JSON.parse(map_type("List<int[]>", "cpp"));
//! // { success: true, type: "vector<vector<int>>", errors: { ... } }
//! ```

use serde::Serialize;
use stubgen::TemplateRequest;
use stubgen_types::Diagnostics;
use wasm_bindgen::prelude::*;

/// Result of [`map_type`].
#[derive(Debug, Serialize)]
struct MapTypeResult {
    success: bool,
    #[serde(rename = "type")]
    ty: Option<String>,
    errors: Diagnostics,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"errors":{{"errors":[{{"message":"Serialization error: {}"}}],"total_errors":1}}}}"#,
            e
        )
    })
}

/// Generate a template from a JSON `TemplateRequest`.
///
/// Returns a JSON string containing a `TemplateResult`:
/// ```json
/// {
///   "success": true,
///   "language": "python",
///   "template": "import json\n...",
///   "template_sha256": "9f2c...",
///   "errors": { "errors": [], "total_errors": 0 }
/// }
/// ```
///
/// On failure, `success` is `false`, `template` is `null`, and `errors`
/// contains structured error information. A request that is not valid JSON
/// yields a single error whose message carries the parse failure.
#[wasm_bindgen]
pub fn generate(request_json: &str) -> String {
    match serde_json::from_str::<TemplateRequest>(request_json) {
        Ok(request) => to_json(&stubgen::generate_to_result(&request)),
        Err(e) => serde_json::json!({
            "success": false,
            "language": null,
            "template": null,
            "template_sha256": null,
            "errors": {
                "errors": [{ "message": format!("Invalid request: {e}") }],
                "total_errors": 1
            }
        })
        .to_string(),
    }
}

/// Map one DSL type expression into a language's native syntax.
#[wasm_bindgen]
pub fn map_type(type_expr: &str, language: &str) -> String {
    let result = match stubgen::map_type(type_expr, language) {
        Ok(ty) => MapTypeResult {
            success: true,
            ty: Some(ty),
            errors: Diagnostics::empty(),
        },
        Err(error) => MapTypeResult {
            success: false,
            ty: None,
            errors: error.diagnostics(),
        },
    };
    to_json(&result)
}

/// Supported languages as `{ "languages": [{ name, display_name }, ...] }`.
#[wasm_bindgen]
pub fn languages() -> String {
    to_json(&serde_json::json!({ "languages": stubgen::list_supported_languages() }))
}

/// The DSL type catalog as JSON.
#[wasm_bindgen]
pub fn types() -> String {
    to_json(&stubgen::list_supported_types())
}

/// Return the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use stubgen::TemplateResult;

    const REQUEST: &str = r#"{
        "question_id": "fib",
        "title": "Fibonacci",
        "description": "Return the n-th Fibonacci number.",
        "signature": {
            "function_name": "fibonacci",
            "parameters": [{ "name": "n", "type": "int" }],
            "returns": { "type": "int" }
        },
        "language": "cpp"
    }"#;

    #[test]
    fn test_generate_success() {
        let result: TemplateResult = serde_json::from_str(&generate(REQUEST)).unwrap();
        assert!(result.success);
        assert!(result.template.unwrap().contains("int fibonacci(int n)"));
    }

    #[test]
    fn test_generate_malformed_request() {
        let json: Value = serde_json::from_str(&generate("{")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"]["total_errors"], 1);
        assert!(json["errors"]["errors"][0]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request:"));
    }

    #[test]
    fn test_generate_unsupported_language() {
        let request = REQUEST.replace("\"cpp\"", "\"swift\"");
        let json: Value = serde_json::from_str(&generate(&request)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"]["errors"][0]["code"], 400);
    }

    #[test]
    fn test_map_type() {
        let json: Value = serde_json::from_str(&map_type("List<int[]>", "cpp")).unwrap();
        assert_eq!(json["type"], "vector<vector<int>>");
        let json: Value = serde_json::from_str(&map_type("int[][]", "cpp")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["type"].is_null());
    }

    #[test]
    fn test_metadata() {
        let json: Value = serde_json::from_str(&languages()).unwrap();
        assert_eq!(json["languages"][0]["name"], "python");
        let json: Value = serde_json::from_str(&types()).unwrap();
        assert_eq!(json["types"]["special"][2], "Graph");
        assert_eq!(version(), "0.1.0");
    }
}
