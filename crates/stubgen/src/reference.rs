//! Metadata about the supported languages and DSL types.
//!
//! Both tables are derived from the closed `Language` and `Primitive` sets,
//! so they stay in step with what the generators accept.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stubgen_types::ast::Primitive;
use stubgen_types::Language;

/// One supported language: `{ "name": "cpp", "display_name": "C++20" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    pub display_name: String,
}

/// DSL type families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFamilies {
    pub primitives: Vec<String>,
    pub collections: Vec<String>,
    pub special: Vec<String>,
}

/// The DSL type catalog with annotated examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTypes {
    pub types: TypeFamilies,
    pub examples: BTreeMap<String, String>,
}

/// Every supported language, in canonical order.
pub fn list_supported_languages() -> Vec<LanguageInfo> {
    Language::ALL
        .into_iter()
        .map(|language| LanguageInfo {
            name: language.id().to_string(),
            display_name: language.display_name().to_string(),
        })
        .collect()
}

/// The DSL type catalog.
pub fn list_supported_types() -> SupportedTypes {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let examples = [
        ("int[]", "Array of integers"),
        ("List<int>", "List of integers"),
        ("List<int[]>", "List of integer arrays"),
        ("Tree<int>", "Binary tree with integer values"),
        ("Graph", "Adjacency list representation"),
    ];
    SupportedTypes {
        types: TypeFamilies {
            primitives: Primitive::ALL.iter().map(|p| p.name().to_string()).collect(),
            collections: strings(&["T[]", "List<T>"]),
            special: strings(&["Tree<T>", "Tree", "Graph"]),
        },
        examples: examples
            .into_iter()
            .map(|(ty, text)| (ty.to_string(), text.to_string()))
            .collect(),
    }
}
