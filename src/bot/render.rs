use teloxide::types::InlineKeyboardMarkup;
use url::Url;

use crate::bot::keyboards::{play_button, CallbackAction, ChatContext};
use crate::database::models::ScoreRecord;
use crate::services::leaderboard::{LeaderboardError, Scope};
use crate::utils::markdown::{bold, escape_markdown};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// A MarkdownV2 message and its action menu, ready to send.
#[derive(Debug, Clone)]
pub struct LeaderboardReply {
    pub text: String,
    pub keyboard: InlineKeyboardMarkup,
}

/// Medal for the podium, `"<rank>."` for everyone else. Ranks start at 1.
pub fn rank_marker(rank: usize) -> String {
    match rank {
        1..=3 => MEDALS[rank - 1].to_string(),
        _ => format!("{rank}."),
    }
}

/// Plain text line for one ranked row.
pub fn format_entry(rank: usize, record: &ScoreRecord) -> String {
    format!("{} {}: {} points", rank_marker(rank), record.display_name(), record.score)
}

fn title(scope: &Scope) -> String {
    match scope {
        Scope::Global => bold("🏆 Global Leaderboard"),
        Scope::Group(_) => bold("🏆 Group Leaderboard"),
    }
}

fn empty_placeholder(scope: &Scope) -> &'static str {
    match scope {
        Scope::Global => "No scores yet! Be the first to play.",
        Scope::Group(_) => "No scores in this group yet! Play from this chat to claim the top spot.",
    }
}

fn retry_action(scope: &Scope) -> CallbackAction {
    match scope {
        Scope::Global => CallbackAction::Leaderboard,
        Scope::Group(_) => CallbackAction::GroupLeaderboard,
    }
}

/// Builds the reply for a finished fetch.
///
/// A failed fetch still yields a sendable message with a retry button.
pub fn render_leaderboard(
    scope: &Scope,
    outcome: &Result<Vec<ScoreRecord>, LeaderboardError>,
    context: ChatContext,
    game_url: &Url,
) -> LeaderboardReply {
    match outcome {
        Ok(rows) => render_rows(scope, rows, context, game_url),
        Err(e) => render_error(scope, e, context, game_url),
    }
}

fn render_rows(
    scope: &Scope,
    rows: &[ScoreRecord],
    context: ChatContext,
    game_url: &Url,
) -> LeaderboardReply {
    let mut text = title(scope);
    text.push_str("\n\n");

    if rows.is_empty() {
        text.push_str(&escape_markdown(empty_placeholder(scope)));
    } else {
        let lines: Vec<String> = rows
            .iter()
            .enumerate()
            .map(|(i, record)| escape_markdown(&format_entry(i + 1, record)))
            .collect();
        text.push_str(&lines.join("\n"));
    }

    if *scope == Scope::Global {
        text.push_str("\n\n");
        text.push_str(&escape_markdown(
            "💡 Use /groupleaderboard in a group chat to see how your group ranks.",
        ));
    }

    let mut keyboard = vec![vec![play_button(context, game_url)]];
    match scope {
        Scope::Global if context.is_group() => {
            keyboard.push(vec![CallbackAction::GroupLeaderboard.button("👥 Group Leaderboard")]);
        }
        Scope::Global => {}
        Scope::Group(_) => {
            keyboard.push(vec![CallbackAction::Leaderboard.button("🌍 Global Leaderboard")]);
        }
    }

    LeaderboardReply {
        text,
        keyboard: InlineKeyboardMarkup::new(keyboard),
    }
}

fn render_error(
    scope: &Scope,
    error: &LeaderboardError,
    context: ChatContext,
    game_url: &Url,
) -> LeaderboardReply {
    let reason = match error {
        LeaderboardError::Timeout(_) => "❌ The leaderboard took too long to load.",
        LeaderboardError::Query(_) => "❌ Couldn't load the leaderboard right now.",
    };
    let text = format!(
        "{}\n\n{}",
        escape_markdown(reason),
        escape_markdown("Please try again in a moment."),
    );

    LeaderboardReply {
        text,
        keyboard: InlineKeyboardMarkup::new(vec![
            vec![retry_action(scope).button("🔄 Try Again")],
            vec![play_button(context, game_url)],
        ]),
    }
}
