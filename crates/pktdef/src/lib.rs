pub use pktdef_syntax::{
    Diagnostic, Expectation, Position, Range, Token, TokenKind, render_diagnostic, tokenize,
    validate, validate_tokens,
};

pub mod prelude {
    pub use crate::{tokenize, validate, validate_tokens};
    pub use crate::{Diagnostic, Range, Token, TokenKind};
}
