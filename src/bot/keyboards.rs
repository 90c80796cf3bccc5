use teloxide::types::{Chat, InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

/// Kind of chat an update came from.
///
/// Taken straight from the update so rendering never needs to look the chat up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatContext {
    Private,
    Group,
    Other,
}

impl ChatContext {
    pub fn from_chat(chat: &Chat) -> Self {
        if chat.is_group() || chat.is_supergroup() {
            ChatContext::Group
        } else if chat.is_private() {
            ChatContext::Private
        } else {
            ChatContext::Other
        }
    }

    pub fn is_group(self) -> bool {
        self == ChatContext::Group
    }
}

/// Opaque callback tokens carried by inline buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Leaderboard,
    GroupLeaderboard,
}

impl CallbackAction {
    pub fn token(self) -> &'static str {
        match self {
            CallbackAction::Leaderboard => "leaderboard",
            CallbackAction::GroupLeaderboard => "group_leaderboard",
        }
    }

    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "leaderboard" => Some(CallbackAction::Leaderboard),
            "group_leaderboard" => Some(CallbackAction::GroupLeaderboard),
            _ => None,
        }
    }

    pub fn button(self, text: &str) -> InlineKeyboardButton {
        InlineKeyboardButton::callback(text, self.token())
    }
}

/// Launches the game. Telegram only accepts web app buttons in private
/// chats, so other chats get a plain link.
pub fn play_button(context: ChatContext, game_url: &Url) -> InlineKeyboardButton {
    match context {
        ChatContext::Private => InlineKeyboardButton::web_app(
            "🎮 Play Game",
            WebAppInfo { url: game_url.clone() },
        ),
        ChatContext::Group | ChatContext::Other => {
            InlineKeyboardButton::url("🎮 Play Game", game_url.clone())
        }
    }
}

/// Keyboard attached to the /start greeting.
pub fn welcome_keyboard(context: ChatContext, game_url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![play_button(context, game_url)],
        vec![CallbackAction::Leaderboard.button("🏆 View Leaderboard")],
    ])
}
