use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::info;

use crate::diagnostics::{publish_diagnostics, to_lsp_diagnostics};
use crate::document::DocumentState;
use crate::symbols::get_document_symbols;

pub struct PacketLanguageServer {
    client: Client,
    documents: Arc<RwLock<HashMap<String, DocumentState>>>,
}

impl PacketLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn update_document(&self, uri: Url, text: String) {
        let state = DocumentState::new(text);

        let diagnostics = to_lsp_diagnostics(&state.diagnostics);
        publish_diagnostics(&self.client, uri.clone(), diagnostics).await;

        let mut documents = self.documents.write().await;
        documents.insert(uri.to_string(), state);
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for PacketLanguageServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        info!("Initializing pktdef language server");

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "pktdef-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        ..Default::default()
                    },
                )),
                document_symbol_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("pktdef language server initialized");
        self.client
            .log_message(MessageType::INFO, "pktdef LSP ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down pktdef language server");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        info!("Document opened: {}", params.text_document.uri);
        self.update_document(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        info!("Document changed: {}", params.text_document.uri);
        if let Some(change) = params.content_changes.into_iter().next() {
            self.update_document(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        info!("Document closed: {}", params.text_document.uri);
        {
            let mut documents = self.documents.write().await;
            documents.remove(&params.text_document.uri.to_string());
        }

        // Clear stale squiggles once the document is gone.
        publish_diagnostics(&self.client, params.text_document.uri, Vec::new()).await;
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri.to_string();
        let documents = self.documents.read().await;

        if let Some(doc) = documents.get(&uri) {
            let symbols = get_document_symbols(doc);
            return Ok(Some(DocumentSymbolResponse::Nested(symbols)));
        }

        Ok(None)
    }
}
