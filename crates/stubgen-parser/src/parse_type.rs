//! Type expression parsing.

use stubgen_lexer::TokenKind;
use stubgen_types::ast::{Primitive, TypeExpr};
use stubgen_types::{ErrorCode, Span, MAX_TYPE_DEPTH};

use crate::parser::Parser;

/// Rendered in unknown-type suggestions.
const VALID_TYPES: &str =
    "int, long, float, double, bool, string, T[], List<T>, Tree, Tree<T>, Graph";

impl<'src> Parser<'src> {
    /// Parse a type expression, enforcing the nesting limit.
    ///
    /// ```ebnf
    /// TypeExpr  = Primitive [ "[" "]" ]
    ///           | "List" "<" TypeExpr ">"
    ///           | "Tree" [ "<" TypeExpr ">" ]
    ///           | "Graph" ;
    /// Primitive = "int" | "long" | "float" | "double" | "bool" | "string" ;
    /// ```
    pub(crate) fn parse_type_expr(&mut self) -> Option<TypeExpr> {
        self.type_depth += 1;
        if self.type_depth > MAX_TYPE_DEPTH {
            self.error_at_current(
                ErrorCode::NESTING_LIMIT_EXCEEDED,
                format!("maximum type nesting depth is {MAX_TYPE_DEPTH}"),
            );
            self.type_depth -= 1;
            return None;
        }
        let result = self.parse_type_inner();
        self.type_depth -= 1;
        result
    }

    fn parse_type_inner(&mut self) -> Option<TypeExpr> {
        let start = self.current_span();
        let ty = match self.peek_kind().clone() {
            TokenKind::KwInt => self.parse_primitive(Primitive::Int)?,
            TokenKind::KwLong => self.parse_primitive(Primitive::Long)?,
            TokenKind::KwFloat => self.parse_primitive(Primitive::Float)?,
            TokenKind::KwDouble => self.parse_primitive(Primitive::Double)?,
            TokenKind::KwBool => self.parse_primitive(Primitive::Bool)?,
            TokenKind::KwString => self.parse_primitive(Primitive::String)?,
            TokenKind::KwList => {
                self.advance();
                if !self.check_exact(&TokenKind::Less) {
                    self.error_with_suggestion(
                        ErrorCode::UNEXPECTED_TOKEN,
                        format!("expected '<' after 'List', got '{}'", self.peek_kind()),
                        self.current_span(),
                        "lists need an element type, e.g. List<int>",
                    );
                    return None;
                }
                let open = self.current_span();
                let inner = self.parse_type_argument()?;
                self.reject_nested_structure(&inner, "List", open)?;
                TypeExpr::list(inner)
            }
            TokenKind::KwTree => {
                self.advance();
                if self.check_exact(&TokenKind::Less) {
                    let open = self.current_span();
                    let payload = self.parse_type_argument()?;
                    self.reject_nested_structure(&payload, "Tree", open)?;
                    TypeExpr::tree(payload)
                } else {
                    TypeExpr::Tree(None)
                }
            }
            TokenKind::KwGraph => {
                self.advance();
                if self.check_exact(&TokenKind::Less) {
                    let span = self.remaining_span();
                    self.error_with_suggestion(
                        ErrorCode::PARAMETERIZED_GRAPH,
                        "'Graph' takes no type parameters",
                        span,
                        "use plain 'Graph'; it is always an int -> List<int> adjacency list",
                    );
                    return None;
                }
                TypeExpr::Graph
            }
            TokenKind::Identifier(name) => {
                let span = self.advance().span;
                self.error_with_suggestion(
                    ErrorCode::UNKNOWN_TYPE,
                    format!("unknown type '{name}'"),
                    span,
                    suggest_type(&name),
                );
                return None;
            }
            TokenKind::Eof => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    "expected a type, got end of input",
                );
                return None;
            }
            other => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("expected a type, got '{other}'"),
                );
                return None;
            }
        };

        if self.check_exact(&TokenKind::LBracket) {
            self.reject_array_suffix(&ty, start);
            return None;
        }
        Some(ty)
    }

    /// `int` or `int[]`.
    fn parse_primitive(&mut self, prim: Primitive) -> Option<TypeExpr> {
        self.advance();
        if !self.eat(&TokenKind::LBracket) {
            return Some(TypeExpr::Primitive(prim));
        }
        self.expect(&TokenKind::RBracket)?;
        Some(TypeExpr::Array(prim))
    }

    /// `"<" TypeExpr ">"`; the cursor sits on `<`.
    fn parse_type_argument(&mut self) -> Option<TypeExpr> {
        let open = self.advance().span;
        let inner = self.parse_type_expr()?;
        if self.eat(&TokenKind::Greater) {
            return Some(inner);
        }
        if self.at_end() {
            self.error_with_suggestion(
                ErrorCode::UNCLOSED_ANGLE,
                "unclosed '<'",
                open,
                "add the matching '>'",
            );
        } else {
            self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!("expected '>', got '{}'", self.peek_kind()),
            );
        }
        None
    }

    /// Trees and graphs are only converted at the top level of a parameter
    /// or return value.
    fn reject_nested_structure(&mut self, inner: &TypeExpr, outer: &str, open: Span) -> Option<()> {
        let (code, what) = if inner.contains_tree() {
            (ErrorCode::NESTED_TREE, "trees")
        } else if inner.contains_graph() {
            (ErrorCode::NESTED_GRAPH, "graphs")
        } else {
            return Some(());
        };
        self.error_with_suggestion(
            code,
            format!("'{inner}' cannot appear inside '{outer}<...>'"),
            open.merge(self.previous_span()),
            format!("{what} are only supported as a whole parameter or return type"),
        );
        None
    }

    /// Any `[` following a complete non-primitive type, or a second `[]`.
    fn reject_array_suffix(&mut self, ty: &TypeExpr, start: Span) {
        self.advance();
        self.eat(&TokenKind::RBracket);
        let span = start.merge(self.previous_span());
        let (message, suggestion) = match ty {
            TypeExpr::Array(prim) => (
                "arrays cannot be nested".to_string(),
                format!("use List<{prim}[]> for a sequence of arrays"),
            ),
            other => (
                format!("only primitives can form arrays, got '{other}[]'"),
                format!("use List<{other}>"),
            ),
        };
        self.error_with_suggestion(ErrorCode::NESTED_ARRAY, message, span, suggestion);
    }
}

/// Build the suggestion attached to an unknown type name.
fn suggest_type(name: &str) -> String {
    let alias = match name {
        "integer" | "Integer" | "i32" | "int32" | "short" | "byte" => Some("int"),
        "i64" | "int64" | "Long" => Some("long"),
        "f32" | "Float" => Some("float"),
        "f64" | "Double" | "number" => Some("double"),
        "boolean" | "Boolean" | "Bool" => Some("bool"),
        "str" | "String" | "char" => Some("string"),
        "TreeNode" | "BinaryTree" => Some("Tree"),
        "array" | "Array" | "vector" | "ArrayList" => Some("List<T>"),
        "Map" | "HashMap" | "Dict" | "dict" => Some("Graph"),
        _ => None,
    };
    if let Some(alias) = alias {
        return format!("did you mean '{alias}'?");
    }
    let case_match = stubgen_lexer::ALL_KEYWORDS
        .iter()
        .find(|kw| kw.eq_ignore_ascii_case(name));
    match case_match {
        Some(kw) => format!("did you mean '{kw}'? type names are case-sensitive"),
        None => format!("valid types are: {VALID_TYPES}"),
    }
}
