// src/main.rs

use clap::Parser;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use newts::config::NewtsConfig;
use newts::db;
use newts::deepseek::DeepSeekClient;
use newts::server::{self, AppState};

#[derive(Parser)]
#[command(name = "newts", about = "AI news analysis backend")]
struct Cli {
    /// Bind host (overrides NEWTS_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides NEWTS_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = NewtsConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }

    let level: Level = config.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting newts backend");
    info!("Model: {}", config.deepseek_model);
    info!("Database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    let deepseek = Arc::new(DeepSeekClient::new(&config));
    let state = AppState { db: pool, deepseek };
    let app = server::router(state, &config);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
