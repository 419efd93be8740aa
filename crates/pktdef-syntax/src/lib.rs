//! # pktdef-syntax
//!
//! Tokenizer and structural validator for the pktdef packet schema
//! language.
//!
//! ## Overview
//!
//! This crate is the front end for `.pkt` schemas — named records of
//! colon-typed fields:
//!
//! ```text
//! packet Handshake {
//!     version: u16
//!     nonce: u64
//! }
//! ```
//!
//! It provides two components:
//!
//! - **Lexer**: scans source text into a positioned token stream
//! - **Validator**: walks the token stream against the packet grammar
//!   and collects positioned diagnostics, recovering at declaration
//!   boundaries instead of aborting
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (tokenize)
//!     ↓
//! Vec<Token>
//!     ↓
//! Validator (validate_tokens)
//!     ↓
//! Vec<Diagnostic>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pktdef_syntax::{TokenKind, tokenize, validate};
//!
//! let source = "packet Handshake { version: u16 }";
//!
//! let tokens = tokenize(source);
//! assert_eq!(tokens.first().map(|t| t.kind), Some(TokenKind::Packet));
//!
//! // A well-formed document produces no diagnostics.
//! assert!(validate(source).is_empty());
//! ```
//!
//! ## Malformed input is data
//!
//! Neither component ever fails: unknown characters are dropped by the
//! lexer, and grammar violations come back as values with 1-based
//! line/column ranges, one per violation:
//!
//! ```rust
//! use pktdef_syntax::validate;
//!
//! let diagnostics = validate("packet Handshake { version u16 }");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "expected \":\"");
//! assert_eq!(diagnostics[0].range.start.line, 1);
//! ```

pub mod error;
pub mod lexer;
pub mod validator;

pub use error::{Diagnostic, Expectation, Position, Range, render_diagnostic};
pub use lexer::{Token, TokenKind, tokenize};
pub use validator::{validate, validate_tokens};
