//! Weatherbot entry point.
//!
//! Binary name: `weatherbot`
//!
//! `weatherbot bot` runs the Telegram bot; `weatherbot serve` serves the
//! read-only log API. Both share the SQLite database named in the config.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;

use weatherbot_core::chat::dispatcher::CommandDispatcher;
use weatherbot_core::weather::cache::WeatherCache;
use weatherbot_core::weather::service::WeatherService;
use weatherbot_infra::config::{BotSecrets, load_app_config, load_dotenv};
use weatherbot_infra::openweather::OpenWeatherClient;
use weatherbot_infra::sqlite::log::SqliteInteractionLogRepository;
use weatherbot_infra::sqlite::pool::DatabasePool;
use weatherbot_infra::sqlite::preference::SqlitePreferenceRepository;
use weatherbot_infra::telegram;
use weatherbot_observe::tracing_setup::{default_filter, init_tracing, shutdown_tracing};
use weatherbot_types::config::AppConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before parsing so `WEATHERBOT_CONFIG` can come from `.env`.
    load_dotenv();
    let cli = Cli::parse();

    init_tracing(default_filter(cli.verbose), cli.otel)?;

    let config = load_app_config(&cli.config).await?;

    let result = match cli.command {
        Commands::Bot => run_bot(config).await,
        Commands::Serve { host, port } => serve(config, host, port).await,
    };

    shutdown_tracing();
    result
}

async fn run_bot(config: AppConfig) -> anyhow::Result<()> {
    let secrets = BotSecrets::from_env()?;

    let pool = DatabasePool::new(&config.database.url)
        .await
        .with_context(|| format!("opening database {}", config.database.url))?;

    let bot = teloxide::Bot::new(secrets.telegram_token());
    let client = OpenWeatherClient::new(secrets.weather_api_key, &config.weather)?;
    let cache = WeatherCache::new(config.weather.cache_ttl_secs, config.weather.cache_capacity);
    let dispatcher = CommandDispatcher::new(
        SqliteInteractionLogRepository::new(pool.clone()),
        SqlitePreferenceRepository::new(pool),
        WeatherService::new(client, cache),
    );

    telegram::run_polling(bot, dispatcher).await?;
    Ok(())
}

async fn serve(config: AppConfig, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let pool = DatabasePool::new(&config.database.url)
        .await
        .with_context(|| format!("opening database {}", config.database.url))?;

    let host = host.unwrap_or(config.http.host);
    let port = port.unwrap_or(config.http.port);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, "Weatherbot API listening");

    let router = http::router::build_router(AppState::new(pool));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
