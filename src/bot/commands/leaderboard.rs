use std::time::{Duration, Instant};
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use url::Url;

use crate::bot::keyboards::{CallbackAction, ChatContext};
use crate::bot::render::{render_leaderboard, LeaderboardReply};
use crate::services::leaderboard::{LeaderboardService, Scope, ScoreSource};
use crate::services::rate_limiter::RateLimiter;
use crate::utils::validation::group_label_for_chat;

/// Who asked for which leaderboard, and from where.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardTrigger {
    pub user_id: u64,
    pub chat_id: i64,
    pub context: ChatContext,
    pub action: CallbackAction,
}

/// What to tell the user after a leaderboard request.
#[derive(Debug)]
pub enum LeaderboardRequest {
    Ready(LeaderboardReply),
    RateLimited(Duration),
    /// A group leaderboard was asked for outside of a group.
    NotInGroup,
}

fn scope_for(trigger: &LeaderboardTrigger) -> Option<Scope> {
    match trigger.action {
        CallbackAction::Leaderboard => Some(Scope::Global),
        CallbackAction::GroupLeaderboard if trigger.context.is_group() => {
            group_label_for_chat(trigger.chat_id).ok().map(Scope::Group)
        }
        CallbackAction::GroupLeaderboard => None,
    }
}

/// Rate limits, fetches and renders one leaderboard request.
///
/// The scope is resolved before the cooldown is charged, so asking for a group
/// leaderboard in a private chat does not lock the user out.
pub async fn prepare_leaderboard<S: ScoreSource>(
    service: &LeaderboardService<S>,
    limiter: &RateLimiter,
    game_url: &Url,
    trigger: LeaderboardTrigger,
    now: Instant,
) -> LeaderboardRequest {
    let Some(scope) = scope_for(&trigger) else {
        return LeaderboardRequest::NotInGroup;
    };

    if !limiter.admit(trigger.user_id, now) {
        return LeaderboardRequest::RateLimited(limiter.remaining(trigger.user_id, now));
    }

    let outcome = service.fetch(&scope).await;
    LeaderboardRequest::Ready(render_leaderboard(&scope, &outcome, trigger.context, game_url))
}

pub async fn send_leaderboard(bot: &Bot, chat_id: ChatId, reply: LeaderboardReply) -> ResponseResult<Message> {
    bot.send_message(chat_id, reply.text)
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(reply.keyboard)
        .await
}

pub fn rate_limited_notice(remaining: Duration) -> String {
    let seconds = remaining.as_millis().div_ceil(1000).max(1);
    format!("Please wait {seconds}s before checking the leaderboard again.")
}

pub const NOT_IN_GROUP_NOTICE: &str =
    "Group leaderboards only work inside group chats. Add me to a group and play from there!";
