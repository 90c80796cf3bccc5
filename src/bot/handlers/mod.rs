pub mod callback;
pub mod general_message;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};
use url::Url;

use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;
use crate::services::leaderboard::LeaderboardService;
use crate::services::rate_limiter::RateLimiter;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

/// Everything the handlers share, injected through the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub leaderboard: LeaderboardService<DatabaseManager>,
    pub limiter: RateLimiter,
    pub game_url: Url,
}

pub struct BotHandler {
    pub state: AppState,
}

impl BotHandler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(message::command_handler),
            )
            .branch(Update::filter_message().endpoint(general_message::handle_general_message))
            .branch(Update::filter_callback_query().endpoint(callback::callback_handler))
    }
}
