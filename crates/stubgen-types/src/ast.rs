//! DSL type expressions and function signatures.
//!
//! Two layers live here:
//! - the raw request shapes ([`FunctionSignature`], [`Parameter`],
//!   [`ReturnType`]) exactly as callers send them as JSON, with type
//!   expressions still as strings;
//! - the validated form ([`Signature`]) in which every type string has been
//!   parsed into a structured [`TypeExpr`] once, up front.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Type expressions
// ══════════════════════════════════════════════════════════════════════════════

/// A scalar DSL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Int,
    Long,
    Float,
    Double,
    Bool,
    String,
}

impl Primitive {
    /// All primitives in canonical order.
    pub const ALL: [Primitive; 6] = [
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
        Primitive::Bool,
        Primitive::String,
    ];

    /// The DSL keyword for this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }

    /// Look up a primitive by its DSL keyword.
    pub fn from_name(name: &str) -> Option<Primitive> {
        Primitive::ALL.into_iter().find(|p| p.name() == name)
    }

    /// `int` or `long`.
    pub fn is_integral(self) -> bool {
        matches!(self, Self::Int | Self::Long)
    }

    /// `float` or `double`.
    pub fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed DSL type expression.
///
/// ```ebnf
/// TypeExpr  = Primitive | Primitive "[]" | "List" "<" TypeExpr ">"
///           | "Tree" | "Tree" "<" TypeExpr ">" | "Graph" ;
/// Primitive = "int" | "long" | "float" | "double" | "bool" | "string" ;
/// ```
///
/// Arrays never nest directly; nested sequences are spelled `List<int[]>`.
/// `Graph` is always an adjacency list from integer ids to integer lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Primitive(Primitive),
    Array(Primitive),
    List(Box<TypeExpr>),
    /// `Tree` (payload `None`) or `Tree<T>`.
    Tree(Option<Box<TypeExpr>>),
    Graph,
}

impl TypeExpr {
    pub fn list(inner: TypeExpr) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn tree(payload: TypeExpr) -> Self {
        Self::Tree(Some(Box::new(payload)))
    }

    /// Top-level tree shape (`Tree` or `Tree<T>`).
    pub fn is_tree(&self) -> bool {
        matches!(self, Self::Tree(_))
    }

    /// Top-level sequence shape (`T[]` or `List<T>`).
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Array(_) | Self::List(_))
    }

    /// The tree payload, if this is a parameterized tree.
    pub fn tree_payload(&self) -> Option<&TypeExpr> {
        match self {
            Self::Tree(Some(payload)) => Some(payload),
            _ => None,
        }
    }

    /// Visit this expression and every nested expression, outermost first.
    pub fn walk(&self, visit: &mut impl FnMut(&TypeExpr)) {
        visit(self);
        match self {
            Self::List(inner) => inner.walk(visit),
            Self::Tree(Some(payload)) => payload.walk(visit),
            Self::Primitive(_) | Self::Array(_) | Self::Tree(None) | Self::Graph => {}
        }
    }

    /// Returns `true` if `pred` holds for this expression or any nested one.
    pub fn any(&self, pred: impl Fn(&TypeExpr) -> bool) -> bool {
        let mut found = false;
        self.walk(&mut |t| found |= pred(t));
        found
    }

    /// A tree appears anywhere in this expression.
    pub fn contains_tree(&self) -> bool {
        self.any(TypeExpr::is_tree)
    }

    /// A graph appears anywhere in this expression.
    pub fn contains_graph(&self) -> bool {
        self.any(|t| matches!(t, TypeExpr::Graph))
    }

    /// A `T[]` or `List<T>` appears anywhere in this expression.
    pub fn contains_sequence(&self) -> bool {
        self.any(TypeExpr::is_sequence)
    }

    /// A generic `List<T>` appears anywhere in this expression.
    pub fn contains_list(&self) -> bool {
        self.any(|t| matches!(t, TypeExpr::List(_)))
    }

    /// `prim` appears anywhere, bare or as an array element.
    pub fn contains_primitive(&self, prim: Primitive) -> bool {
        self.any(|t| matches!(t, TypeExpr::Primitive(p) | TypeExpr::Array(p) if *p == prim))
    }

    /// Nesting depth: `int` is 1, `List<int[]>` is 3.
    pub fn depth(&self) -> u32 {
        match self {
            Self::Primitive(_) | Self::Tree(None) | Self::Graph => 1,
            Self::Array(_) => 2,
            Self::List(inner) => 1 + inner.depth(),
            Self::Tree(Some(payload)) => 1 + payload.depth(),
        }
    }
}

impl From<Primitive> for TypeExpr {
    fn from(p: Primitive) -> Self {
        TypeExpr::Primitive(p)
    }
}

/// Renders the canonical DSL spelling, e.g. `List<int[]>`.
impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Array(p) => write!(f, "{p}[]"),
            Self::List(inner) => write!(f, "List<{inner}>"),
            Self::Tree(None) => write!(f, "Tree"),
            Self::Tree(Some(payload)) => write!(f, "Tree<{payload}>"),
            Self::Graph => write!(f, "Graph"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Raw request shapes
// ══════════════════════════════════════════════════════════════════════════════

/// A parameter as supplied by the caller: `{ "name": "nums", "type": "int[]" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// The return type as supplied by the caller: `{ "type": "int" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnType {
    #[serde(rename = "type")]
    pub ty: String,
}

/// A function signature as supplied by the caller, types still unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub function_name: String,
    pub parameters: Vec<Parameter>,
    pub returns: ReturnType,
}

impl FunctionSignature {
    pub fn new(
        function_name: impl Into<String>,
        parameters: Vec<Parameter>,
        returns: impl Into<String>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            parameters,
            returns: ReturnType { ty: returns.into() },
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Validated signature
// ══════════════════════════════════════════════════════════════════════════════

/// A parameter whose type has been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedParameter {
    pub name: String,
    pub ty: TypeExpr,
}

/// A validated function signature. Generators only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub function_name: String,
    pub parameters: Vec<TypedParameter>,
    pub returns: TypeExpr,
}

impl Signature {
    /// Every type in the signature: parameter types in order, then the return type.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeExpr> {
        self.parameters
            .iter()
            .map(|p| &p.ty)
            .chain(std::iter::once(&self.returns))
    }

    /// Any parameter or the return type involves a tree.
    pub fn uses_tree(&self) -> bool {
        self.all_types().any(TypeExpr::contains_tree)
    }

    /// Parameter names in declaration order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }
}
