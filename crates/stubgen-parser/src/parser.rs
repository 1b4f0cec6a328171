//! Core parser infrastructure: token cursor, error reporting, helpers.

use stubgen_lexer::{Token, TokenKind};
use stubgen_types::ast::TypeExpr;
use stubgen_types::{Diagnostics, ErrorCode, Span, StubError};

/// The DSL type parser.
///
/// Consumes the token stream of one type expression and builds a
/// [`TypeExpr`]. Parsing stops at the first error: type expressions are
/// short, so one precise message beats a cascade.
pub struct Parser<'src> {
    /// The token stream (always ends with `Eof`).
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// The type expression being parsed.
    source: &'src str,
    /// Where the expression came from, e.g. `returns.type`.
    context: &'src str,
    /// Collected errors.
    errors: Diagnostics,
    /// Current type nesting depth (max [`stubgen_types::MAX_TYPE_DEPTH`]).
    pub(crate) type_depth: u32,
}

/// Result of parsing.
pub struct ParseResult {
    /// The parsed type, `None` if any error was reported.
    pub ty: Option<TypeExpr>,
    pub errors: Diagnostics,
}

impl<'src> Parser<'src> {
    /// Create a new parser from a token stream and its source text.
    pub fn new(mut tokens: Vec<Token>, source: &'src str) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let end = Span::point(source.len() as u32);
            tokens.push(Token::new(TokenKind::Eof, end));
        }
        Self {
            tokens,
            pos: 0,
            source,
            context: "",
            errors: Diagnostics::empty(),
            type_depth: 0,
        }
    }

    /// Label errors with where the expression came from.
    pub fn with_context(mut self, context: &'src str) -> Self {
        self.context = context;
        self
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> &Token {
        // `new` guarantees a trailing Eof, so the stream is never empty
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns the previously consumed token's span.
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::point(0)
        }
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    /// Span from the current token to the last token before `Eof`.
    pub(crate) fn remaining_span(&self) -> Span {
        let current = self.current_span();
        self.tokens[self.pos.min(self.tokens.len() - 1)..]
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .fold(current, |span, t| span.merge(t.span))
    }

    /// Check if the current token matches the given kind exactly.
    pub(crate) fn check_exact(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check_exact(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect a specific token kind. Returns the token if matched, or emits an error.
    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Option<Token> {
        if self.check_exact(expected) {
            Some(self.advance())
        } else {
            self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!("expected '{}', got '{}'", expected, self.peek_kind()),
            );
            None
        }
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Report an error at the current token position.
    pub(crate) fn error_at_current(&mut self, code: ErrorCode, message: impl Into<String>) {
        let span = self.current_span();
        self.error_at(code, message, span);
    }

    /// Report an error at a specific span.
    pub(crate) fn error_at(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        let error = self.build_error(code, message, span);
        self.errors.push_error(error);
    }

    /// Report an error at a specific span, with a fix suggestion.
    pub(crate) fn error_with_suggestion(
        &mut self,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        suggestion: impl Into<String>,
    ) {
        let error = self
            .build_error(code, message, span)
            .with_suggestion(suggestion);
        self.errors.push_error(error);
    }

    fn build_error(&self, code: ErrorCode, message: impl Into<String>, span: Span) -> StubError {
        StubError::new(code, message, self.context, self.source).with_span(span)
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the token stream into a single [`TypeExpr`].
    ///
    /// The whole stream must be consumed: `int int` reports the second
    /// `int` as trailing input.
    pub fn parse(mut self) -> ParseResult {
        let mut ty = self.parse_type_expr();
        if ty.is_some() && !self.at_end() {
            let span = self.remaining_span();
            self.error_at(
                ErrorCode::TRAILING_INPUT,
                format!("unexpected '{}' after a complete type", span.slice(self.source)),
                span,
            );
        }
        if self.errors.has_errors() {
            ty = None;
        }
        ParseResult {
            ty,
            errors: self.errors,
        }
    }
}
