use crate::error::{Position, Range};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::with_capacity(4);
    m.insert("packet", TokenKind::Packet);
    m
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Packet,
    Identifier,
    Colon,
    LeftBrace,
    RightBrace,
    Comment,
    Eof,
}

impl TokenKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Packet => "keyword 'packet'",
            TokenKind::Identifier => "identifier",
            TokenKind::Colon => "':'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of input",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Range covered by the token, end computed from the lexeme length.
    pub fn range(&self) -> Range {
        Range::new(
            Position::new(self.line, self.column),
            Position::new(self.line, self.column + self.text.chars().count()),
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "{}", self.kind.display_name())
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Scan `input` into tokens. Never fails: whitespace separates tokens,
/// characters that match no rule are dropped, and an unterminated block
/// comment is absorbed to end of input. The returned sequence is always
/// terminated by exactly one `Eof` token.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(input.len() / 4);
    let mut chars = input.chars().peekable();

    let mut line = 1;
    let mut col = 1;

    let bump = |ch: char, line: &mut usize, col: &mut usize| {
        if ch == '\n' {
            *line += 1;
            *col = 1;
        } else {
            *col += 1;
        }
    };

    while let Some(&ch) = chars.peek() {
        let start_line = line;
        let start_col = col;

        match ch {
            c if c.is_whitespace() => {
                chars.next();
                bump(c, &mut line, &mut col);
            }

            ':' => {
                chars.next();
                bump(ch, &mut line, &mut col);
                tokens.push(Token {
                    kind: TokenKind::Colon,
                    text: ":".to_string(),
                    line: start_line,
                    column: start_col,
                });
            }
            '{' => {
                chars.next();
                bump(ch, &mut line, &mut col);
                tokens.push(Token {
                    kind: TokenKind::LeftBrace,
                    text: "{".to_string(),
                    line: start_line,
                    column: start_col,
                });
            }
            '}' => {
                chars.next();
                bump(ch, &mut line, &mut col);
                tokens.push(Token {
                    kind: TokenKind::RightBrace,
                    text: "}".to_string(),
                    line: start_line,
                    column: start_col,
                });
            }

            '/' => {
                chars.next();
                bump(ch, &mut line, &mut col);

                if chars.peek() == Some(&'/') {
                    chars.next();
                    bump('/', &mut line, &mut col);

                    let mut text = String::from("//");
                    while let Some(&c) = chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        chars.next();
                        bump(c, &mut line, &mut col);
                        text.push(c);
                    }

                    tokens.push(Token {
                        kind: TokenKind::Comment,
                        text,
                        line: start_line,
                        column: start_col,
                    });
                } else if chars.peek() == Some(&'*') {
                    chars.next();
                    bump('*', &mut line, &mut col);

                    let mut text = String::from("/*");
                    while let Some(c) = chars.next() {
                        bump(c, &mut line, &mut col);
                        text.push(c);
                        if c == '*' && chars.peek() == Some(&'/') {
                            chars.next();
                            bump('/', &mut line, &mut col);
                            text.push('/');
                            break;
                        }
                    }
                    // Falling out of the loop means the comment ran to
                    // end of input; it still becomes a token.

                    tokens.push(Token {
                        kind: TokenKind::Comment,
                        text,
                        line: start_line,
                        column: start_col,
                    });
                }
                // A lone '/' matches no rule and is dropped.
            }

            c if c.is_alphabetic() || c == '_' => {
                let mut text = String::with_capacity(16);
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        text.push(c);
                        chars.next();
                        bump(c, &mut line, &mut col);
                    } else {
                        break;
                    }
                }

                let kind = KEYWORDS
                    .get(text.as_str())
                    .copied()
                    .unwrap_or(TokenKind::Identifier);

                tokens.push(Token {
                    kind,
                    text,
                    line: start_line,
                    column: start_col,
                });
            }

            _ => {
                // The grammar has no lexical-error token; anything
                // unrecognized is skipped.
                chars.next();
                bump(ch, &mut line, &mut col);
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        text: String::new(),
        line,
        column: col,
    });
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].column, 1);
    }

    #[test]
    fn test_symbols() {
        let tokens = tokenize(": { }");

        assert_eq!(tokens[0].kind, TokenKind::Colon);
        assert_eq!(tokens[1].kind, TokenKind::LeftBrace);
        assert_eq!(tokens[2].kind, TokenKind::RightBrace);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_keyword_vs_identifier() {
        let tokens = tokenize("packet packets Packet _packet");

        assert_eq!(tokens[0].kind, TokenKind::Packet);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "packets");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_position_tracking() {
        let tokens = tokenize("packet Foo\n{ }");

        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 8));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 1));
        assert_eq!((tokens[3].line, tokens[3].column), (2, 3));
    }

    #[test]
    fn test_line_comment() {
        let tokens = tokenize("// note\npacket");

        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "// note");
        assert_eq!(tokens[1].kind, TokenKind::Packet);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_block_comment() {
        let tokens = tokenize("/* one\ntwo */ x");

        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "/* one\ntwo */");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = tokenize("/* never closed");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "/* never closed");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_unknown_characters_skipped() {
        let tokens = tokenize("packet @#% Foo");

        assert_eq!(tokens[0].kind, TokenKind::Packet);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "Foo");
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_lone_slash_dropped() {
        let tokens = tokenize("a / b");

        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].text, "b");
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_token_range() {
        let tokens = tokenize("  wire");

        let range = tokens[0].range();
        assert_eq!((range.start.line, range.start.column), (1, 3));
        assert_eq!((range.end.line, range.end.column), (1, 7));
    }
}
