use pktdef_syntax::Diagnostic;
use serde::Serialize;

/// JSON shape of one checked file. Positions stay 1-based in the
/// report; consumers convert to their own convention.
#[derive(Serialize)]
pub struct FileReport {
    pub file: String,
    pub diagnostics: Vec<DiagnosticReport>,
}

#[derive(Serialize)]
pub struct DiagnosticReport {
    pub message: String,
    pub range: RangeReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeReport {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            message: diagnostic.message.clone(),
            range: RangeReport {
                start_line: diagnostic.range.start.line,
                start_column: diagnostic.range.start.column,
                end_line: diagnostic.range.end.line,
                end_column: diagnostic.range.end.column,
            },
        }
    }
}

impl FileReport {
    pub fn new(file: String, diagnostics: &[Diagnostic]) -> Self {
        Self {
            file,
            diagnostics: diagnostics.iter().map(DiagnosticReport::from).collect(),
        }
    }
}
