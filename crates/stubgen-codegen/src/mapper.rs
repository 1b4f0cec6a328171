//! Type mappers: DSL type expressions to native type syntax.
//!
//! Each mapper pattern-matches the parsed [`TypeExpr`] tree, recursing into
//! list elements and tree payloads, so nested forms such as `List<int[]>`
//! fall out of the structure rather than string rewriting.

use std::collections::BTreeSet;

use stubgen_types::ast::{Primitive, TypeExpr};
use stubgen_types::Language;

use crate::idioms::{self, Idioms};

/// Maps DSL types into one target language.
pub trait TypeMapper {
    /// The language this mapper targets.
    fn language(&self) -> Language;

    /// Native spelling of `ty`.
    fn map_type(&self, ty: &TypeExpr) -> String;

    /// Import/include lines the mapped types need, sorted and deduplicated.
    fn imports<'a>(&self, types: impl IntoIterator<Item = &'a TypeExpr>) -> BTreeSet<String>;

    /// The idiom table of [`TypeMapper::language`].
    fn idioms(&self) -> &'static Idioms {
        Idioms::for_language(self.language())
    }
}

fn add(set: &mut BTreeSet<String>, line: &str) {
    set.insert(line.to_string());
}

// ══════════════════════════════════════════════════════════════════════════════
// Python
// ══════════════════════════════════════════════════════════════════════════════

/// `typing`-annotated Python 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonMapper;

impl TypeMapper for PythonMapper {
    fn language(&self) -> Language {
        Language::Python
    }

    fn map_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Primitive(p) => idioms::PYTHON.primitive(*p).to_string(),
            TypeExpr::Array(p) => format!("List[{}]", idioms::PYTHON.primitive(*p)),
            TypeExpr::List(inner) => format!("List[{}]", self.map_type(inner)),
            TypeExpr::Tree(None) => "Optional[TreeNode]".to_string(),
            TypeExpr::Tree(Some(payload)) => {
                format!("Optional[TreeNode[{}]]", self.map_type(payload))
            }
            TypeExpr::Graph => "Dict[int, List[int]]".to_string(),
        }
    }

    fn imports<'a>(&self, types: impl IntoIterator<Item = &'a TypeExpr>) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for ty in types {
            if ty.contains_sequence() {
                add(&mut set, "from typing import List");
            }
            if ty.contains_tree() {
                add(&mut set, "from typing import Optional");
            }
            if ty.contains_graph() {
                add(&mut set, "from typing import Dict");
                add(&mut set, "from typing import List");
            }
        }
        set
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Java
// ══════════════════════════════════════════════════════════════════════════════

/// Java 17 with boxed generic arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaMapper;

impl JavaMapper {
    /// Wrapper class used wherever a primitive sits inside `<...>`.
    pub fn boxed(prim: Primitive) -> &'static str {
        match prim {
            Primitive::Int => "Integer",
            Primitive::Long => "Long",
            Primitive::Float => "Float",
            Primitive::Double => "Double",
            Primitive::Bool => "Boolean",
            Primitive::String => "String",
        }
    }

    /// Spelling of `ty` as a generic type argument.
    pub fn map_type_argument(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Primitive(p) => Self::boxed(*p).to_string(),
            other => self.map_type(other),
        }
    }
}

impl TypeMapper for JavaMapper {
    fn language(&self) -> Language {
        Language::Java
    }

    fn map_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Primitive(p) => idioms::JAVA.primitive(*p).to_string(),
            TypeExpr::Array(p) => format!("{}[]", idioms::JAVA.primitive(*p)),
            TypeExpr::List(inner) => format!("List<{}>", self.map_type_argument(inner)),
            TypeExpr::Tree(None) => "TreeNode".to_string(),
            TypeExpr::Tree(Some(payload)) => {
                format!("TreeNode<{}>", self.map_type_argument(payload))
            }
            TypeExpr::Graph => "Map<Integer, List<Integer>>".to_string(),
        }
    }

    fn imports<'a>(&self, types: impl IntoIterator<Item = &'a TypeExpr>) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for ty in types {
            if ty.contains_list() || ty.contains_graph() {
                add(&mut set, "import java.util.List;");
            }
            if ty.contains_graph() {
                add(&mut set, "import java.util.Map;");
            }
        }
        set
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// C++
// ══════════════════════════════════════════════════════════════════════════════

/// C++20 with `using namespace std`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppMapper;

impl TypeMapper for CppMapper {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn map_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Primitive(p) => idioms::CPP.primitive(*p).to_string(),
            TypeExpr::Array(p) => format!("vector<{}>", idioms::CPP.primitive(*p)),
            TypeExpr::List(inner) => format!("vector<{}>", self.map_type(inner)),
            TypeExpr::Tree(None) => "TreeNode<>*".to_string(),
            TypeExpr::Tree(Some(payload)) => format!("TreeNode<{}>*", self.map_type(payload)),
            TypeExpr::Graph => "unordered_map<int, vector<int>>".to_string(),
        }
    }

    fn imports<'a>(&self, types: impl IntoIterator<Item = &'a TypeExpr>) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for ty in types {
            if ty.contains_sequence() {
                add(&mut set, "#include <vector>");
            }
            if ty.contains_primitive(Primitive::String) {
                add(&mut set, "#include <string>");
            }
            if ty.contains_graph() {
                add(&mut set, "#include <unordered_map>");
                add(&mut set, "#include <vector>");
            }
        }
        set
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// JavaScript
// ══════════════════════════════════════════════════════════════════════════════

/// JSDoc type syntax for Node.js.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptMapper;

impl TypeMapper for JavaScriptMapper {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn map_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Primitive(p) => idioms::JAVASCRIPT.primitive(*p).to_string(),
            TypeExpr::Array(p) => format!("{}[]", idioms::JAVASCRIPT.primitive(*p)),
            TypeExpr::List(inner) => format!("{}[]", self.map_type(inner)),
            TypeExpr::Tree(_) => "TreeNode".to_string(),
            TypeExpr::Graph => "Object<number, number[]>".to_string(),
        }
    }

    fn imports<'a>(&self, _types: impl IntoIterator<Item = &'a TypeExpr>) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of_int_arrays() -> TypeExpr {
        TypeExpr::list(TypeExpr::Array(Primitive::Int))
    }

    #[test]
    fn test_nested_list_in_every_language() {
        let ty = list_of_int_arrays();
        assert_eq!(PythonMapper.map_type(&ty), "List[List[int]]");
        assert_eq!(JavaMapper.map_type(&ty), "List<int[]>");
        assert_eq!(CppMapper.map_type(&ty), "vector<vector<int>>");
        assert_eq!(JavaScriptMapper.map_type(&ty), "number[][]");
    }

    #[test]
    fn test_java_boxes_generic_arguments() {
        let ty = TypeExpr::list(TypeExpr::list(Primitive::Bool.into()));
        assert_eq!(JavaMapper.map_type(&ty), "List<List<Boolean>>");
        let tree = TypeExpr::tree(Primitive::Double.into());
        assert_eq!(JavaMapper.map_type(&tree), "TreeNode<Double>");
    }

    fn assert_imports_ignore_order<M: TypeMapper>(mapper: M) {
        let graph = TypeExpr::Graph;
        let nested = list_of_int_arrays();
        let tree = TypeExpr::tree(Primitive::String.into());
        let forward = mapper.imports([&graph, &nested, &tree, &graph, &nested]);
        let backward = mapper.imports([&tree, &nested, &graph]);
        assert_eq!(forward, backward, "{:?}", mapper.language());
        assert_eq!(mapper.imports([&nested, &tree, &nested]), mapper.imports([&tree, &nested]));
    }

    #[test]
    fn test_imports_ignore_order_and_repeats() {
        assert_imports_ignore_order(PythonMapper);
        assert_imports_ignore_order(JavaMapper);
        assert_imports_ignore_order(CppMapper);
        assert_imports_ignore_order(JavaScriptMapper);
    }

    #[test]
    fn test_python_imports() {
        let graph = TypeExpr::Graph;
        let imports = PythonMapper.imports([&graph]);
        assert_eq!(
            imports.into_iter().collect::<Vec<_>>(),
            vec!["from typing import Dict", "from typing import List"]
        );
        assert!(PythonMapper
            .imports([&TypeExpr::Primitive(Primitive::Int)])
            .is_empty());
    }

    #[test]
    fn test_cpp_string_include() {
        let ty = TypeExpr::tree(Primitive::String.into());
        let imports = CppMapper.imports([&ty]);
        assert!(imports.contains("#include <string>"));
        assert!(!imports.contains("#include <vector>"));
    }

    #[test]
    fn test_java_array_needs_no_import() {
        let ty = TypeExpr::Array(Primitive::Int);
        assert!(JavaMapper.imports([&ty]).is_empty());
    }

    #[test]
    fn test_javascript_never_imports() {
        let ty = list_of_int_arrays();
        assert!(JavaScriptMapper.imports([&ty, &TypeExpr::Graph]).is_empty());
    }
}
