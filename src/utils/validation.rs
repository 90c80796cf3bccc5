use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Result the game posts back through the web app once a round ends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreSubmission {
    pub score: i64,
    #[serde(default)]
    pub rank: Option<u32>,
}

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs should be within reasonable range for user chats (up to 2^31-1)
    if chat_id > 2147483647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Supergroup IDs start around -1000000000000
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

/// Scores are stored against the decimal chat id of the group they were played in.
pub fn group_label_for_chat(chat_id: i64) -> Result<String> {
    validate_telegram_chat_id(chat_id)?;

    if chat_id > 0 {
        return Err(anyhow!("Private chats have no group leaderboard"));
    }

    Ok(chat_id.to_string())
}

pub fn parse_score_submission(data: &str) -> Result<ScoreSubmission> {
    let data = data.trim();

    if data.is_empty() {
        return Err(anyhow!("Score payload cannot be empty"));
    }

    if data.len() > 4096 {
        return Err(anyhow!("Score payload is too large"));
    }

    let submission: ScoreSubmission = serde_json::from_str(data)
        .map_err(|e| anyhow!("Malformed score payload: {}", e))?;

    if submission.score < 0 {
        return Err(anyhow!("Score cannot be negative"));
    }

    if submission.rank == Some(0) {
        return Err(anyhow!("Rank must start at 1"));
    }

    Ok(submission)
}
