//! DSL lexer: converts a type expression string to a token stream.
//!
//! Features:
//! - Keywords for the six primitives and `List` / `Tree` / `Graph`
//! - Any other word is lexed as an identifier so the parser can report it
//! - Spaces and tabs between tokens are ignored (`List< int[] >`)
//! - Error recovery: an invalid character is reported and skipped

use stubgen_types::{Diagnostics, ErrorCode, Span, StubError};

use crate::token::{Token, TokenKind};

/// The DSL lexer.
///
/// Converts one type expression into a vector of [`Token`]s, collecting up
/// to [`stubgen_types::MAX_ERRORS`] errors along the way.
pub struct Lexer<'src> {
    /// The full type expression.
    source: &'src str,
    /// Where the expression came from (e.g. `parameters[0].type`).
    context: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
    /// Collected errors.
    errors: Diagnostics,
}

/// Result of lexing: tokens + any errors collected.
pub struct LexResult {
    /// The token stream (always ends with [`TokenKind::Eof`]).
    pub tokens: Vec<Token>,
    /// Errors encountered during lexing.
    pub errors: Diagnostics,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for a type expression.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            context: "",
            pos: 0,
            errors: Diagnostics::empty(),
        }
    }

    /// Label errors with where the expression came from.
    pub fn with_context(mut self, context: &'src str) -> Self {
        self.context = context;
        self
    }

    /// Lex the entire expression into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();

        loop {
            if self.errors.total_errors >= stubgen_types::MAX_ERRORS {
                break;
            }
            let Some(token) = self.scan() else {
                continue;
            };
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        // Ensure token stream always ends with Eof
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            tokens.push(Token::new(TokenKind::Eof, self.current_span()));
        }

        LexResult {
            tokens,
            errors: self.errors,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn current_span(&self) -> Span {
        Span::point(self.pos as u32)
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start as u32, self.pos as u32)
    }

    fn emit_error(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        let err = StubError::new(code, message, self.context, self.source).with_span(span);
        self.errors.push_error(err);
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == ' ' || ch == '\t' {
                self.advance();
            } else {
                break;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one token. Returns `None` after reporting a skipped character.
    fn scan(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(ch) = self.advance() else {
            return Some(Token::new(TokenKind::Eof, self.current_span()));
        };

        let kind = match ch {
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            c if c.is_ascii_alphabetic() || c == '_' => return Some(self.scan_word(start)),
            other => {
                let span = self.span_from(start);
                let message = if other.is_ascii_digit() {
                    format!("unexpected digit '{other}' in type expression")
                } else {
                    format!("invalid character '{}' in type expression", other.escape_default())
                };
                self.emit_error(ErrorCode::INVALID_CHARACTER, message, span);
                return None;
            }
        };

        Some(Token::new(kind, self.span_from(start)))
    }

    fn scan_word(&mut self, start: usize) -> Token {
        // First character was already consumed (letter or `_`)
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.pos];
        let kind = TokenKind::from_keyword(text)
            .unwrap_or_else(|| TokenKind::Identifier(text.to_string()));

        Token::new(kind, self.span_from(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_are_byte_offsets() {
        let result = Lexer::new("List<int[]>").lex();
        let spans: Vec<(u32, u32)> = result
            .tokens
            .iter()
            .map(|t| (t.span.start, t.span.end))
            .collect();
        assert_eq!(
            spans,
            vec![(0, 4), (4, 5), (5, 8), (8, 9), (9, 10), (10, 11), (11, 11)]
        );
    }

    #[test]
    fn test_context_is_attached_to_errors() {
        let result = Lexer::new("int?").with_context("returns.type").lex();
        let err = result.errors.first().expect("error");
        assert_eq!(err.context, "returns.type");
        assert_eq!(err.source, "int?");
        assert_eq!(err.span, Some(Span::new(3, 4)));
    }
}
