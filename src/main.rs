// Revu - AI code review service
// Main entry point

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use revu::config::load_config;
use revu::providers::GeminiClient;
use revu::server::ReviewServer;

#[derive(Parser)]
#[command(name = "revu", about = "AI code review service", version)]
struct Args {
    /// Bind address override (e.g., "0.0.0.0:8000")
    #[arg(long)]
    bind: Option<String>,

    /// Gemini model override
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Load configuration
    let mut config = load_config()?;
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    if let Some(model) = args.model {
        config.model = model;
    }
    config.validate()?;

    // Create the Gemini client
    let client = GeminiClient::new(config.api_key.clone(), config.model.clone())?;

    // Create and run the server
    let server = ReviewServer::new(config, Arc::new(client));
    server.serve().await?;

    Ok(())
}
