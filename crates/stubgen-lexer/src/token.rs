//! Token types for the DSL lexer.
//!
//! Defines [`TokenKind`] covering every lexeme of the type DSL and
//! [`Token`], which pairs a kind with a byte [`Span`].

use stubgen_types::Span;
use std::fmt;

/// Every reserved word of the type DSL.
///
/// Keywords are case-sensitive: primitives are lower-case, the
/// structured types are PascalCase.
pub const ALL_KEYWORDS: &[&str] = &[
    // Primitives (6)
    "int", "long", "float", "double", "bool", "string",
    // Structured types (3)
    "List", "Tree", "Graph",
];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range in the type expression.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns `true` if this token is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in the type DSL.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ── Primitive keywords ───────────────────────────────────

    /// `int`
    KwInt,
    /// `long`
    KwLong,
    /// `float`
    KwFloat,
    /// `double`
    KwDouble,
    /// `bool`
    KwBool,
    /// `string`
    KwString,

    // ── Structured-type keywords ─────────────────────────────

    /// `List`
    KwList,
    /// `Tree`
    KwTree,
    /// `Graph`
    KwGraph,

    // ── Identifiers ──────────────────────────────────────────

    /// Any other word: `integer`, `Map`, `TreeNode`.
    /// Never valid in a type, but lexed so the parser can name it.
    Identifier(String),

    // ── Punctuation ──────────────────────────────────────────

    /// `<`
    Less,
    /// `>`
    Greater,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Look up a keyword token by its source text.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "int" => TokenKind::KwInt,
            "long" => TokenKind::KwLong,
            "float" => TokenKind::KwFloat,
            "double" => TokenKind::KwDouble,
            "bool" => TokenKind::KwBool,
            "string" => TokenKind::KwString,
            "List" => TokenKind::KwList,
            "Tree" => TokenKind::KwTree,
            "Graph" => TokenKind::KwGraph,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns `true` for reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KwInt
                | TokenKind::KwLong
                | TokenKind::KwFloat
                | TokenKind::KwDouble
                | TokenKind::KwBool
                | TokenKind::KwString
                | TokenKind::KwList
                | TokenKind::KwTree
                | TokenKind::KwGraph
        )
    }

    /// Returns `true` for the six primitive keywords.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TokenKind::KwInt
                | TokenKind::KwLong
                | TokenKind::KwFloat
                | TokenKind::KwDouble
                | TokenKind::KwBool
                | TokenKind::KwString
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::KwInt => f.write_str("int"),
            TokenKind::KwLong => f.write_str("long"),
            TokenKind::KwFloat => f.write_str("float"),
            TokenKind::KwDouble => f.write_str("double"),
            TokenKind::KwBool => f.write_str("bool"),
            TokenKind::KwString => f.write_str("string"),
            TokenKind::KwList => f.write_str("List"),
            TokenKind::KwTree => f.write_str("Tree"),
            TokenKind::KwGraph => f.write_str("Graph"),
            TokenKind::Identifier(s) => f.write_str(s),
            TokenKind::Less => f.write_str("<"),
            TokenKind::Greater => f.write_str(">"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_round_trips_through_display() {
        for kw in ALL_KEYWORDS {
            let kind = TokenKind::from_keyword(kw).expect("keyword");
            assert!(kind.is_keyword());
            assert_eq!(kind.to_string(), *kw);
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(TokenKind::from_keyword("list"), None);
        assert_eq!(TokenKind::from_keyword("Int"), None);
        assert_eq!(TokenKind::from_keyword("graph"), None);
    }

    #[test]
    fn test_primitive_classification() {
        assert!(TokenKind::KwDouble.is_primitive());
        assert!(!TokenKind::KwList.is_primitive());
        assert!(!TokenKind::Identifier("int32".into()).is_keyword());
    }
}
