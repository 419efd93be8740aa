use tower_lsp::{LspService, Server};
use tracing::info;

mod backend;
mod diagnostics;
mod document;
mod symbols;

use backend::PacketLanguageServer;

#[tokio::main]
async fn main() {
    // stdout carries the protocol; log to stderr only.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting pktdef language server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(PacketLanguageServer::new);

    Server::new(stdin, stdout, socket).serve(service).await;

    info!("pktdef language server stopped");
}
