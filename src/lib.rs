//! # Leaderboard Bot
//! 
//! A Telegram bot that launches a web game and shows its score leaderboards.
//! 
//! ## Features
//! - Global and per-group top 10 leaderboards with medal ranks
//! - Per-user cooldown on leaderboard requests
//! - Retry buttons when the score store is slow or unavailable
//! - Persistent storage with SQLite

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Leaderboard fetching, rate limiting and health checks
pub mod services;
/// Utility functions for markdown, logging, validation and feedback
pub mod utils;
