/// Telegram command definitions and their handlers
pub mod commands;
/// Update routing for messages and callback queries
pub mod handlers;
/// Inline keyboards and callback tokens
pub mod keyboards;
/// Leaderboard message rendering
pub mod render;
