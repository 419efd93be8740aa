use crate::diagnostics::to_lsp_position;
use crate::document::DocumentState;
use pktdef_syntax::TokenKind;
use tower_lsp::lsp_types::*;

/// Packet declarations for the outline view, recovered straight from
/// the token stream so broken documents still produce an outline.
pub fn get_document_symbols(doc: &DocumentState) -> Vec<DocumentSymbol> {
    let mut symbols = Vec::new();

    let grammar: Vec<_> = doc
        .tokens
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Comment | TokenKind::Eof))
        .collect();

    let mut i = 0;
    while i < grammar.len() {
        if grammar[i].kind == TokenKind::Packet
            && let Some(name) = grammar
                .get(i + 1)
                .filter(|t| t.kind == TokenKind::Identifier)
        {
            // The declaration extends to its closing brace, or as far
            // as it got if it never closes.
            let mut end = name.range().end;
            let mut j = i + 2;
            while j < grammar.len() && grammar[j].kind != TokenKind::Packet {
                end = grammar[j].range().end;
                if grammar[j].kind == TokenKind::RightBrace {
                    break;
                }
                j += 1;
            }

            let selection = Range {
                start: to_lsp_position(name.range().start),
                end: to_lsp_position(name.range().end),
            };

            #[allow(deprecated)]
            symbols.push(DocumentSymbol {
                name: name.text.clone(),
                detail: Some("packet".to_string()),
                kind: SymbolKind::STRUCT,
                tags: None,
                deprecated: None,
                range: Range {
                    start: to_lsp_position(grammar[i].range().start),
                    end: to_lsp_position(end),
                },
                selection_range: selection,
                children: None,
            });

            i += 2;
        } else {
            i += 1;
        }
    }

    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_lists_every_declaration() {
        let source = "packet Ping { seq: u32 }\npacket Pong { seq: u32 }";
        let doc = DocumentState::new(source.to_string());

        let symbols = get_document_symbols(&doc);
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].name, "Ping");
        assert_eq!(symbols[1].name, "Pong");
        assert_eq!(symbols[1].range.start.line, 1);
    }

    #[test]
    fn test_outline_survives_broken_declarations() {
        let source = "packet { }\npacket Bar { x y }";
        let doc = DocumentState::new(source.to_string());

        let symbols = get_document_symbols(&doc);
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Bar");
    }
}
