pub mod health;
pub mod leaderboard;
pub mod rate_limiter;
