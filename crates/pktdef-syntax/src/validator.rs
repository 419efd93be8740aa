//! Structural validation of packet declarations.
//!
//! A single forward pass over the token stream checks the grammar
//!
//! ```text
//! document   := packetDecl*
//! packetDecl := 'packet' Identifier '{' field* '}'
//! field      := Identifier ':' Identifier
//! ```
//!
//! and pushes one [`Diagnostic`] per violation instead of failing. After
//! every declaration attempt the cursor resynchronizes at the next
//! `packet` keyword, so one broken declaration never hides the ones that
//! follow it.

use crate::error::{Diagnostic, Expectation};
use crate::lexer::{Token, TokenKind, tokenize};

/// Forward-only cursor over a token sequence. Comment tokens are
/// invisible to grammar checks, and the `Eof` terminator reads as
/// exhaustion, so "no current token" covers both a truncated document
/// and a fully consumed one.
struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    fn peek(&mut self) -> Option<&'a Token> {
        while let Some(token) = self.tokens.get(self.index) {
            match token.kind {
                TokenKind::Comment => self.index += 1,
                TokenKind::Eof => return None,
                _ => return Some(token),
            }
        }
        None
    }

    /// The `match` primitive: advance past the current token iff it has
    /// the expected kind; never advance on failure.
    fn eat(&mut self, kind: TokenKind) -> bool {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    /// Panic-mode recovery: skip ahead to the next top-level anchor
    /// token (the `packet` keyword) or the end of the stream.
    fn synchronize(&mut self) {
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::Packet {
                break;
            }
            self.index += 1;
        }
    }
}

/// Validate `source` and return every grammar violation in source order.
/// This is the core's single entry point: a pure function of the text,
/// with no state carried between calls.
pub fn validate(source: &str) -> Vec<Diagnostic> {
    let tokens = tokenize(source);
    validate_tokens(&tokens)
}

/// Validate an already tokenized document.
pub fn validate_tokens(tokens: &[Token]) -> Vec<Diagnostic> {
    let mut cursor = Cursor::new(tokens);
    let mut diagnostics = Vec::new();

    while cursor.peek().is_some() {
        packet_decl(&mut cursor, &mut diagnostics);
        cursor.synchronize();
    }

    diagnostics
}

/// Report `expected` anchored at the current token. With the stream
/// exhausted there is nothing to anchor to, and a positionless
/// diagnostic is useless on an editor surface, so nothing is emitted.
fn report(cursor: &mut Cursor, expected: Expectation, out: &mut Vec<Diagnostic>) {
    if let Some(token) = cursor.peek() {
        out.push(Diagnostic::new(expected.message(), token.range()));
    }
}

/// packetDecl := 'packet' Identifier '{' field* '}'
///
/// A header failure abandons the declaration at once; the caller's
/// resynchronization bounds the damage to this declaration.
fn packet_decl(cursor: &mut Cursor, out: &mut Vec<Diagnostic>) {
    if !cursor.eat(TokenKind::Packet) {
        report(cursor, Expectation::PacketKeyword, out);
        return;
    }
    if !cursor.eat(TokenKind::Identifier) {
        report(cursor, Expectation::PacketName, out);
        return;
    }
    if !cursor.eat(TokenKind::LeftBrace) {
        report(cursor, Expectation::OpeningBrace, out);
        return;
    }

    while let Some(token) = cursor.peek() {
        if token.kind == TokenKind::RightBrace {
            break;
        }
        if !field(cursor, out) {
            // The rest of a declaration with a broken field would only
            // produce cascading noise; leave it to the resync skip.
            return;
        }
    }

    if !cursor.eat(TokenKind::RightBrace) {
        report(cursor, Expectation::ClosingBrace, out);
    }
}

/// field := Identifier ':' Identifier
///
/// Returns `false` when the surrounding declaration should be
/// abandoned. A missing field type is reported but keeps the field loop
/// alive: the declaration's closing brace is still consumed normally.
fn field(cursor: &mut Cursor, out: &mut Vec<Diagnostic>) -> bool {
    if !cursor.eat(TokenKind::Identifier) {
        report(cursor, Expectation::FieldName, out);
        return false;
    }
    if !cursor.eat(TokenKind::Colon) {
        report(cursor, Expectation::Colon, out);
        return false;
    }
    if !cursor.eat(TokenKind::Identifier) {
        report(cursor, Expectation::FieldType, out);
    }
    true
}
