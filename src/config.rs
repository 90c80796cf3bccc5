use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_DATABASE_URL: &str = "sqlite:./data/leaderboard.db";

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub game_url: Url,
    pub leaderboard_cooldown: Duration,
    pub query_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;
        
        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }
        
        let game_url = env::var("GAME_URL")
            .map_err(|_| anyhow!("GAME_URL must be set"))?;
        let game_url = Url::parse(game_url.trim())
            .map_err(|e| anyhow!("Invalid GAME_URL: {}", e))?;
        
        let database_url = Self::database_url_from_env();
        
        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;
        
        let leaderboard_cooldown = millis_from_env("LEADERBOARD_COOLDOWN_MS", 3000)?;
        let query_timeout = millis_from_env("QUERY_TIMEOUT_MS", 5000)?;
        
        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            game_url,
            leaderboard_cooldown,
            query_timeout,
        })
    }

    /// Database URL alone, for tools that never talk to Telegram.
    pub fn database_url_from_env() -> String {
        match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

fn millis_from_env(name: &str, default_ms: u64) -> Result<Duration> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Duration::from_millis)
            .map_err(|_| anyhow!("Invalid {}", name)),
        _ => Ok(Duration::from_millis(default_ms)),
    }
}
