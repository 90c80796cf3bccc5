use teloxide::prelude::*;
use teloxide::types::{MessageKind, MessageWebAppData};

use crate::bot::handlers::HandlerResult;
use crate::utils::feedback::CommandFeedback;
use crate::utils::validation::{parse_score_submission, ScoreSubmission};

/// Announcement for a score posted back by the game. Nothing is stored here;
/// the game writes scores to the database itself.
pub fn score_announcement(submission: &ScoreSubmission) -> String {
    match submission.rank {
        Some(rank) => format!(
            "🎯 You scored {} points and placed #{}! Use /leaderboard to see the top 10.",
            submission.score, rank
        ),
        None => format!(
            "🎯 You scored {} points! Use /leaderboard to see the top 10.",
            submission.score
        ),
    }
}

/// Parsed score payload when `msg` carries web app data, `None` for any other message.
pub fn score_submission(msg: &Message) -> Option<anyhow::Result<ScoreSubmission>> {
    match &msg.kind {
        MessageKind::WebAppData(MessageWebAppData { web_app_data }) => {
            Some(parse_score_submission(&web_app_data.data))
        }
        _ => None,
    }
}

pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    if let Some(submission) = score_submission(&msg) {
        match submission {
            Ok(submission) => {
                feedback.success(&score_announcement(&submission)).await?;
            }
            Err(e) => {
                tracing::warn!("Rejected web app payload in chat {}: {}", msg.chat.id.0, e);
                feedback.error("Couldn't read your score from the game.").await?;
            }
        }
        return Ok(());
    }

    if let Some(text) = msg.text() {
        // Only private chats get a hint, groups see plenty of unrelated slash text
        if text.starts_with('/') && msg.chat.is_private() {
            let command = text.split_whitespace().next().unwrap_or(text);
            feedback
                .info(&format!("Unknown command: {command}. Use /help to see all available commands."))
                .await?;
        }
    }

    Ok(())
}
