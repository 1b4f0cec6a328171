//! Reference scaffold: stdin JSON → solution → stdout JSON.
//!
//! Mirrors what every generated `main` does: parse one JSON object, pull
//! one field per parameter, rebuild trees and integer-keyed graphs, call
//! the solution, then print the result as a single JSON line.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use stubgen_types::ast::{Primitive, Signature, TypeExpr};

use crate::error::{EvalError, EvalResult};
use crate::tree::{tree_from_json, tree_to_json, TreeNode};

/// A decoded parameter value or a solution result.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Primitives, arrays and lists stay as JSON.
    Json(Value),
    Tree(Option<Box<TreeNode<Value>>>),
    Graph(BTreeMap<i64, Vec<i64>>),
}

impl Argument {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<Option<&TreeNode<Value>>> {
        match self {
            Self::Tree(root) => Some(root.as_deref()),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&BTreeMap<i64, Vec<i64>>> {
        match self {
            Self::Graph(graph) => Some(graph),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Tree(_) => "tree",
            Self::Graph(_) => "graph",
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Shape checks
// ══════════════════════════════════════════════════════════════════════════════

fn check_primitive(prim: Primitive, value: &Value, context: &str) -> EvalResult<()> {
    let ok = match prim {
        Primitive::Int | Primitive::Long => value.is_i64() || value.is_u64(),
        Primitive::Float | Primitive::Double => value.is_number(),
        Primitive::Bool => value.is_boolean(),
        Primitive::String => value.is_string(),
    };
    if ok {
        Ok(())
    } else {
        Err(EvalError::mismatch(context, prim.name(), value))
    }
}

fn check_elements(
    element: &TypeExpr,
    value: &Value,
    context: &str,
    expected: &TypeExpr,
) -> EvalResult<()> {
    let Value::Array(items) = value else {
        return Err(EvalError::mismatch(context, expected.to_string(), value));
    };
    items
        .iter()
        .enumerate()
        .try_for_each(|(i, item)| check_shape(element, item, &format!("{context}[{i}]")))
}

/// Verify that `value` is a valid JSON encoding of `ty`.
pub fn check_shape(ty: &TypeExpr, value: &Value, context: &str) -> EvalResult<()> {
    match ty {
        TypeExpr::Primitive(prim) => check_primitive(*prim, value, context),
        TypeExpr::Array(prim) => check_elements(&TypeExpr::Primitive(*prim), value, context, ty),
        TypeExpr::List(inner) => check_elements(inner, value, context, ty),
        TypeExpr::Tree(payload) => {
            let items = match value {
                Value::Null => return Ok(()),
                Value::Array(items) => items,
                other => return Err(EvalError::mismatch(context, ty.to_string(), other)),
            };
            let payload = payload
                .as_deref()
                .cloned()
                .unwrap_or(TypeExpr::Primitive(Primitive::Int));
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| !item.is_null())
                .try_for_each(|(i, item)| check_shape(&payload, item, &format!("{context}[{i}]")))
        }
        TypeExpr::Graph => {
            let Value::Object(entries) = value else {
                return Err(EvalError::mismatch(context, "Graph", value));
            };
            let neighbors = TypeExpr::Array(Primitive::Int);
            entries.iter().try_for_each(|(key, item)| {
                parse_node_id(key, context)?;
                check_shape(&neighbors, item, &format!("{context}[\"{key}\"]"))
            })
        }
    }
}

fn parse_node_id(key: &str, context: &str) -> EvalResult<i64> {
    key.parse().map_err(|_| EvalError::TypeMismatch {
        context: context.to_string(),
        expected: "integer node id".to_string(),
        found: format!("key \"{key}\""),
    })
}

// ══════════════════════════════════════════════════════════════════════════════
// Decode / encode
// ══════════════════════════════════════════════════════════════════════════════

/// Decode one parameter value the way a generated program does.
pub fn decode_argument(ty: &TypeExpr, value: &Value, context: &str) -> EvalResult<Argument> {
    check_shape(ty, value, context)?;
    match ty {
        TypeExpr::Tree(_) => Ok(Argument::Tree(tree_from_json(value)?)),
        TypeExpr::Graph => {
            let mut graph = BTreeMap::new();
            if let Value::Object(entries) = value {
                for (key, item) in entries {
                    let neighbors: Vec<i64> = serde_json::from_value(item.clone())
                        .map_err(|e| EvalError::InvalidInput(e.to_string()))?;
                    graph.insert(parse_node_id(key, context)?, neighbors);
                }
            }
            Ok(Argument::Graph(graph))
        }
        _ => Ok(Argument::Json(value.clone())),
    }
}

/// Encode a solution result declared as `ty` into JSON.
pub fn encode_result(ty: &TypeExpr, result: &Argument) -> EvalResult<Value> {
    match (ty, result) {
        (TypeExpr::Tree(_), Argument::Tree(root)) => tree_to_json(root.as_deref()),
        (TypeExpr::Graph, Argument::Graph(graph)) => {
            let entries: Map<String, Value> = graph
                .iter()
                .map(|(node, neighbors)| (node.to_string(), Value::from(neighbors.clone())))
                .collect();
            Ok(Value::Object(entries))
        }
        (TypeExpr::Tree(_) | TypeExpr::Graph, other) => Err(EvalError::Solution(format!(
            "expected a {ty} result, got {}",
            other.kind()
        ))),
        (_, Argument::Json(value)) => {
            check_shape(ty, value, "result")?;
            Ok(value.clone())
        }
        (_, other) => Err(EvalError::Solution(format!(
            "expected a {ty} result, got {}",
            other.kind()
        ))),
    }
}

/// Run `solution` against `stdin` under `signature` and return stdout.
///
/// Arguments are passed in declaration order. The output is exactly one
/// JSON line ending in `\n`.
pub fn run_scaffold<F>(signature: &Signature, stdin: &str, solution: F) -> EvalResult<String>
where
    F: FnOnce(Vec<Argument>) -> EvalResult<Argument>,
{
    let input: Value =
        serde_json::from_str(stdin).map_err(|e| EvalError::InvalidInput(e.to_string()))?;
    let fields = match input {
        Value::Object(fields) => fields,
        other => {
            return Err(EvalError::InvalidInput(format!(
                "expected a JSON object, found {}",
                crate::error::kind_of(&other)
            )))
        }
    };

    let arguments = signature
        .parameters
        .iter()
        .map(|param| {
            let value = fields
                .get(&param.name)
                .ok_or_else(|| EvalError::MissingParameter(param.name.clone()))?;
            decode_argument(&param.ty, value, &param.name)
        })
        .collect::<EvalResult<Vec<_>>>()?;

    let result = solution(arguments)?;
    let output = encode_result(&signature.returns, &result)?;
    let mut line = serde_json::to_string(&output).map_err(|e| EvalError::Encode(e.to_string()))?;
    line.push('\n');
    Ok(line)
}
