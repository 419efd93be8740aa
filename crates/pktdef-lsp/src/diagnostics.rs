use pktdef_syntax::{Diagnostic as GrammarDiagnostic, Position as SourcePosition};
use tower_lsp::Client;
use tower_lsp::lsp_types::*;

/// Core positions are 1-based; LSP positions are 0-based.
pub fn to_lsp_position(position: SourcePosition) -> Position {
    Position {
        line: position.line.saturating_sub(1) as u32,
        character: position.column.saturating_sub(1) as u32,
    }
}

/// Convert a core grammar violation to an LSP Diagnostic
pub fn to_lsp_diagnostic(diagnostic: &GrammarDiagnostic) -> Diagnostic {
    Diagnostic {
        range: Range {
            start: to_lsp_position(diagnostic.range.start),
            end: to_lsp_position(diagnostic.range.end),
        },
        severity: Some(DiagnosticSeverity::ERROR),
        code: None,
        code_description: None,
        source: Some("pktdef".to_string()),
        message: diagnostic.message.clone(),
        related_information: None,
        tags: None,
        data: None,
    }
}

pub fn to_lsp_diagnostics(diagnostics: &[GrammarDiagnostic]) -> Vec<Diagnostic> {
    diagnostics.iter().map(to_lsp_diagnostic).collect()
}

/// Publish diagnostics to the client
pub async fn publish_diagnostics(client: &Client, uri: Url, diagnostics: Vec<Diagnostic>) {
    client.publish_diagnostics(uri, diagnostics, None).await;
}
