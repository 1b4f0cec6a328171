//! Per-language idiom tables: primitive spellings and default values.
//!
//! Mappers and generators read these tables instead of hard-coding
//! literals, so the four back-ends stay aligned on what a "zero" value
//! looks like.

use stubgen_types::ast::{Primitive, TypeExpr};
use stubgen_types::Language;

/// Literal spellings a back-end needs.
///
/// Per-primitive arrays are indexed in [`Primitive::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Idioms {
    pub language: Language,
    /// Native spelling of each primitive.
    pub primitives: [&'static str; 6],
    /// Default value of each primitive.
    pub zeros: [&'static str; 6],
    /// Line comment marker.
    pub comment: &'static str,
    /// Absent tree.
    pub null: &'static str,
    /// Empty graph.
    pub empty_map: &'static str,
    /// Empty `T[]`; `#ELEM` is replaced by the element type.
    pub empty_array: &'static str,
    /// Empty `List<T>`.
    pub empty_list: &'static str,
}

pub const PYTHON: Idioms = Idioms {
    language: Language::Python,
    primitives: ["int", "int", "float", "float", "bool", "str"],
    zeros: ["0", "0", "0.0", "0.0", "False", "\"\""],
    comment: "#",
    null: "None",
    empty_map: "{}",
    empty_array: "[]",
    empty_list: "[]",
};

pub const JAVA: Idioms = Idioms {
    language: Language::Java,
    primitives: ["int", "long", "float", "double", "boolean", "String"],
    zeros: ["0", "0L", "0.0f", "0.0", "false", "\"\""],
    comment: "//",
    null: "null",
    empty_map: "new HashMap<>()",
    empty_array: "new #ELEM[0]",
    empty_list: "new ArrayList<>()",
};

pub const CPP: Idioms = Idioms {
    language: Language::Cpp,
    primitives: ["int", "long long", "float", "double", "bool", "string"],
    zeros: ["0", "0", "0.0", "0.0", "false", "\"\""],
    comment: "//",
    null: "nullptr",
    empty_map: "{}",
    empty_array: "{}",
    empty_list: "{}",
};

pub const JAVASCRIPT: Idioms = Idioms {
    language: Language::JavaScript,
    primitives: ["number", "number", "number", "number", "boolean", "string"],
    zeros: ["0", "0", "0.0", "0.0", "false", "\"\""],
    comment: "//",
    null: "null",
    empty_map: "{}",
    empty_array: "[]",
    empty_list: "[]",
};

impl Idioms {
    /// The table for `language`.
    pub fn for_language(language: Language) -> &'static Idioms {
        match language {
            Language::Python => &PYTHON,
            Language::Java => &JAVA,
            Language::Cpp => &CPP,
            Language::JavaScript => &JAVASCRIPT,
        }
    }

    /// Native spelling of a primitive.
    pub fn primitive(&self, prim: Primitive) -> &'static str {
        self.primitives[prim as usize]
    }

    /// Default value returned by a generated stub of type `ty`.
    pub fn default_value(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Tree(_) => self.null.to_string(),
            TypeExpr::Graph => self.empty_map.to_string(),
            TypeExpr::Array(prim) => self.empty_array.replace("#ELEM", self.primitive(*prim)),
            TypeExpr::List(_) => self.empty_list.to_string(),
            TypeExpr::Primitive(prim) => self.zeros[*prim as usize].to_string(),
        }
    }
}
