//! # Leaderboard Bot Main Entry Point
//!
//! Initializes logging, loads configuration, sets up the score database,
//! and runs the Telegram bot next to the health check server.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leaderboard_bot::bot::handlers::{AppState, BotHandler};
use leaderboard_bot::config::Config;
use leaderboard_bot::database::connection::DatabaseManager;
use leaderboard_bot::services::health::HealthService;
use leaderboard_bot::services::leaderboard::LeaderboardService;
use leaderboard_bot::services::rate_limiter::RateLimiter;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leaderboard_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Leaderboard Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Database: {}, HTTP Port: {}, Game: {}",
        config.database_url, config.http_port, config.game_url);

    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    db_manager.run_migrations().await?;
    let db_arc = Arc::new(db_manager);
    info!("Database initialized successfully");

    let limiter = RateLimiter::new(config.leaderboard_cooldown);
    let state = AppState {
        leaderboard: LeaderboardService::with_timeout(db_arc.as_ref().clone(), config.query_timeout),
        limiter: limiter.clone(),
        game_url: config.game_url.clone(),
    };
    info!(
        "Leaderboard cooldown {}ms, query timeout {}ms",
        limiter.cooldown().as_millis(),
        config.query_timeout.as_millis()
    );

    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(state);

    let health_service = HealthService::new(db_arc.clone(), limiter);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .dependencies(dptree::deps![handler.state.clone()])
            .default_handler(|upd| async move {
                tracing::debug!("Unhandled update: {:?}", upd.kind);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
