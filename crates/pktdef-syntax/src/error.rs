use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// The grammar construct a diagnostic reports as missing. This is the
/// whole error taxonomy of the core: every violation is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    PacketKeyword,
    PacketName,
    OpeningBrace,
    FieldName,
    Colon,
    FieldType,
    ClosingBrace,
}

impl Expectation {
    pub fn message(&self) -> &'static str {
        match self {
            Expectation::PacketKeyword => "expected \"packet\" keyword",
            Expectation::PacketName => "expected packet name",
            Expectation::OpeningBrace => "expected \"{\"",
            Expectation::FieldName => "expected field name",
            Expectation::Colon => "expected \":\"",
            Expectation::FieldType => "expected field type",
            Expectation::ClosingBrace => "expected \"}\"",
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// One positioned grammar violation. Positions are 1-based, matching
/// editor line/column conventions; hosts convert to their own scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub range: Range,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, range: Range) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.range.start)
    }
}

/// Render a diagnostic as a caret excerpt of its source line, without
/// color. Callers that want color apply it around the returned text.
pub fn render_diagnostic(source: &str, diagnostic: &Diagnostic) -> String {
    let start = diagnostic.range.start;
    let lines: Vec<&str> = source.lines().collect();
    let line_idx = start.line.saturating_sub(1);

    if start.line == 0 || line_idx >= lines.len() {
        return diagnostic.to_string();
    }

    let carets = if diagnostic.range.end.line == start.line {
        diagnostic
            .range
            .end
            .column
            .saturating_sub(start.column)
            .max(1)
    } else {
        1
    };

    let mut output = String::new();
    output.push_str(&format!("  --> line {}:{}\n", start.line, start.column));
    output.push_str("   |\n");
    output.push_str(&format!(" {:>2} | {}\n", start.line, lines[line_idx]));
    output.push_str(&format!(
        "   | {}{} {}\n",
        " ".repeat(start.column.saturating_sub(1)),
        "^".repeat(carets),
        diagnostic.message
    ));
    output.push_str("   |");

    output
}
