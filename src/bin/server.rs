//! Document Q&A server binary
//!
//! Run with: cargo run --bin docqa-rag-server [config.toml]

use docqa_rag::{AppConfig, ApiServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docqa_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                     Document QA API                       ║
║       Grounded answers with web-search fallback           ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    let config_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Generate model: {}", config.gemini.generate_model);
    tracing::info!("  - Vision model: {}", config.gemini.vision_model);
    tracing::info!("  - Embedding model: {}", config.gemini.embed_model);
    tracing::info!("  - Chunk size: {}", config.chunking.chunk_size);

    if config.gemini.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; Gemini calls will fail");
        tracing::warn!("  export GEMINI_API_KEY=<your key>");
    }

    let server = ApiServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST   /api/upload            - Upload a PDF or image");
    println!("  POST   /api/upload-json       - Ingest a URL or raw text");
    println!("  POST   /api/query             - Ask a question");
    println!("  POST   /api/search-web        - Web-search fallback");
    println!("  POST   /api/add-context       - Add a file to a session");
    println!("  POST   /api/add-context-json  - Add a URL/text to a session");
    println!("  GET    /api/sessions          - List sessions");
    println!("  DELETE /api/sessions/:id      - Delete a session");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
