use pktdef_syntax::{Diagnostic, Token, tokenize, validate_tokens};

/// State of one open document. Rebuilt wholesale on every change (the
/// server runs with full-document sync), so a stale in-flight result is
/// simply replaced.
pub struct DocumentState {
    /// Raw text content
    pub text: String,
    /// Token stream of the current text
    pub tokens: Vec<Token>,
    /// Grammar violations in the current text
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentState {
    pub fn new(text: String) -> Self {
        let tokens = tokenize(&text);
        let diagnostics = validate_tokens(&tokens);
        Self {
            text,
            tokens,
            diagnostics,
        }
    }
}
