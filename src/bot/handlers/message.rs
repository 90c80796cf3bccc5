use std::time::Instant;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::leaderboard::{
    prepare_leaderboard, rate_limited_notice, send_leaderboard, LeaderboardRequest,
    LeaderboardTrigger, NOT_IN_GROUP_NOTICE,
};
use crate::bot::commands::{start::handle_start, Command};
use crate::bot::handlers::{AppState, HandlerResult};
use crate::bot::keyboards::{CallbackAction, ChatContext};
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_rate_limited,
};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: AppState,
) -> HandlerResult {
    let chat_id = msg.chat.id.0;
    let (user_id, username) = msg
        .from()
        .map(|u| (u.id.0, u.username.clone().unwrap_or_else(|| u.first_name.clone())))
        .unwrap_or((0, "unknown".to_string()));
    let command = format!("{cmd:?}");
    log_command_start(&command, &username, user_id, chat_id);

    let result = match cmd {
        Command::Help => bot
            .send_message(msg.chat.id, Command::descriptions().to_string())
            .await
            .map(|_| ()),
        Command::Start => handle_start(bot, msg, &state.game_url).await,
        Command::Leaderboard => {
            leaderboard_command(bot, msg, user_id, CallbackAction::Leaderboard, &state).await
        }
        Command::GroupLeaderboard => {
            leaderboard_command(bot, msg, user_id, CallbackAction::GroupLeaderboard, &state).await
        }
    };

    match result {
        Ok(()) => {
            log_command_success(&command, &username, user_id, chat_id, None);
            Ok(())
        }
        Err(e) => {
            log_command_error(&command, &username, user_id, chat_id, &e.to_string());
            Err(e.into())
        }
    }
}

async fn leaderboard_command(
    bot: Bot,
    msg: Message,
    user_id: u64,
    action: CallbackAction,
    state: &AppState,
) -> ResponseResult<()> {
    let trigger = LeaderboardTrigger {
        user_id,
        chat_id: msg.chat.id.0,
        context: ChatContext::from_chat(&msg.chat),
        action,
    };
    let feedback = CommandFeedback::new(bot.clone(), msg.chat.id);

    match prepare_leaderboard(&state.leaderboard, &state.limiter, &state.game_url, trigger, Instant::now()).await {
        LeaderboardRequest::Ready(reply) => {
            send_leaderboard(&bot, msg.chat.id, reply).await?;
        }
        LeaderboardRequest::RateLimited(remaining) => {
            log_rate_limited(action.token(), user_id, trigger.chat_id);
            feedback.warning(&rate_limited_notice(remaining)).await?;
        }
        LeaderboardRequest::NotInGroup => {
            feedback.info(NOT_IN_GROUP_NOTICE).await?;
        }
    }

    Ok(())
}
