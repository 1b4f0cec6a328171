//! Names a generated program cannot use for the function or its parameters.

use stubgen_types::Language;

const PYTHON: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const JAVA: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
    "public", "record", "return", "short", "static", "strictfp", "super", "switch",
    "synchronized", "this", "throw", "throws", "transient", "true", "try", "var", "void",
    "volatile", "while", "yield",
];

const CPP: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

const JAVASCRIPT: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false",
    "finally", "for", "function", "if", "implements", "import", "in", "instanceof",
    "interface", "let", "new", "null", "package", "private", "protected", "public", "return",
    "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
    "void", "while", "with", "yield",
];

/// Identifiers the generated programs declare themselves: scaffold locals,
/// helper functions, the `Solution` and `TreeNode` types and the names the
/// standard imports bring into scope.
pub const SCAFFOLD_NAMES: &[&str] = &[
    // scaffold locals
    "data", "solution", "result", "output", "line", "lines", "input", "reader", "buffer", "rl",
    "args", "main", "self",
    // generated types and helpers
    "Solution", "TreeNode", "T", "GSON", "deserializeTree", "serializeTree",
    "deserialize_tree", "serialize_tree", "deserializeGraph", "serializeGraph",
    // imported names
    "json", "sys", "deque", "Generic", "Optional", "TypeVar", "List", "Dict", "Gson",
    "JsonArray", "JsonElement", "JsonNull", "JsonObject", "JsonParser", "TypeToken", "Type",
    "Integer", "String", "Map", "std", "nlohmann", "string", "vector", "readline",
    "require", "console", "process",
    // runtime names the scaffolds call
    "print", "int", "System", "StringBuilder", "BufferedReader", "InputStreamReader",
    "IOException", "Queue", "LinkedList", "HashMap", "ArrayList", "cin", "cout", "endl",
    "stoi", "to_string", "stringstream", "queue", "unordered_map", "JSON", "Array", "Object",
];

/// Methods the generated `Solution` classes inherit and cannot redefine
/// with an arbitrary signature: the members of `java.lang.Object`.
pub const INHERITED_METHODS: &[&str] = &[
    "clone", "equals", "finalize", "getClass", "hashCode", "notify", "notifyAll", "toString",
    "wait",
];

fn keywords(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => PYTHON,
        Language::Java => JAVA,
        Language::Cpp => CPP,
        Language::JavaScript => JAVASCRIPT,
    }
}

/// Every target language in which `name` is a keyword, in canonical order.
pub fn reserved_in(name: &str) -> Vec<Language> {
    Language::ALL
        .into_iter()
        .filter(|lang| keywords(*lang).contains(&name))
        .collect()
}

/// Returns `true` if a generated program already declares `name`.
pub fn is_scaffold_name(name: &str) -> bool {
    SCAFFOLD_NAMES.contains(&name)
}

/// Returns `true` if `name` would redefine an inherited method of the
/// generated class: a `java.lang.Object` member or a Python dunder.
pub fn is_inherited_method(name: &str) -> bool {
    let dunder = name.len() > 4 && name.starts_with("__") && name.ends_with("__");
    dunder || INHERITED_METHODS.contains(&name)
}
