use std::time::Instant;
use teloxide::prelude::*;

use crate::bot::commands::leaderboard::{
    prepare_leaderboard, rate_limited_notice, send_leaderboard, LeaderboardRequest,
    LeaderboardTrigger, NOT_IN_GROUP_NOTICE,
};
use crate::bot::handlers::{AppState, HandlerResult};
use crate::bot::keyboards::{CallbackAction, ChatContext};
use crate::utils::logging::{log_command_start, log_command_success, log_rate_limited};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: AppState,
) -> HandlerResult {
    let user_id = q.from.id.0;
    let username = q.from.username.clone().unwrap_or_else(|| q.from.first_name.clone());

    let (Some(data), Some(message)) = (q.data.as_deref(), q.message.as_ref()) else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };
    let chat_id = message.chat.id.0;

    tracing::info!(
        "Callback received: '{}' from user {} ({}) in chat {}",
        data, username, user_id, chat_id
    );

    let Some(action) = CallbackAction::parse(data) else {
        tracing::warn!("Ignoring unknown callback data '{}'", data);
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };
    log_command_start(action.token(), &username, user_id, chat_id);

    let trigger = LeaderboardTrigger {
        user_id,
        chat_id,
        context: ChatContext::from_chat(&message.chat),
        action,
    };

    let request = prepare_leaderboard(&state.leaderboard, &state.limiter, &state.game_url, trigger, Instant::now()).await;

    // Always answered, before any send
    let mut answer = bot.answer_callback_query(q.id.clone());
    if let Some((text, show_alert)) = callback_notice(&request) {
        answer = answer.text(text).show_alert(show_alert);
    }
    answer.await?;

    match request {
        LeaderboardRequest::Ready(reply) => {
            send_leaderboard(&bot, message.chat.id, reply).await?;
            log_command_success(action.token(), &username, user_id, chat_id, None);
        }
        LeaderboardRequest::RateLimited(_) => {
            log_rate_limited(action.token(), user_id, chat_id);
        }
        LeaderboardRequest::NotInGroup => {}
    }

    Ok(())
}

/// Toast text and alert flag for the callback answer, if the user needs one.
pub fn callback_notice(request: &LeaderboardRequest) -> Option<(String, bool)> {
    match request {
        LeaderboardRequest::Ready(_) => None,
        LeaderboardRequest::RateLimited(remaining) => {
            Some((format!("⏳ {}", rate_limited_notice(*remaining)), false))
        }
        LeaderboardRequest::NotInGroup => Some((NOT_IN_GROUP_NOTICE.to_string(), true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::render::LeaderboardReply;
    use std::time::Duration;
    use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

    #[test]
    fn test_rendered_leaderboard_needs_no_toast() {
        let request = LeaderboardRequest::Ready(LeaderboardReply {
            text: "🏆".to_string(),
            keyboard: InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback("🔄", "leaderboard")]]),
        });
        assert_eq!(callback_notice(&request), None);
    }

    #[test]
    fn test_rate_limited_press_gets_wait_toast() {
        let notice = callback_notice(&LeaderboardRequest::RateLimited(Duration::from_millis(1200)));
        assert_eq!(
            notice,
            Some(("⏳ Please wait 2s before checking the leaderboard again.".to_string(), false))
        );
    }

    #[test]
    fn test_group_button_in_private_chat_gets_alert() {
        let notice = callback_notice(&LeaderboardRequest::NotInGroup);
        assert_eq!(notice, Some((NOT_IN_GROUP_NOTICE.to_string(), true)));
    }
}
