use teloxide::prelude::*;
use url::Url;

use crate::bot::keyboards::{welcome_keyboard, ChatContext};

pub fn welcome_text(first_name: Option<&str>) -> String {
    let name = first_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Player");
    format!("🎮 Welcome {name}!\n\nReady to play? Tap the button below to start the game!")
}

pub async fn handle_start(bot: Bot, msg: Message, game_url: &Url) -> ResponseResult<()> {
    let first_name = msg.from().map(|user| user.first_name.as_str());
    let context = ChatContext::from_chat(&msg.chat);

    bot.send_message(msg.chat.id, welcome_text(first_name))
        .reply_markup(welcome_keyboard(context, game_url))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_uses_first_name() {
        assert!(welcome_text(Some("Ada")).starts_with("🎮 Welcome Ada!"));
    }

    #[test]
    fn test_welcome_falls_back_to_player() {
        assert!(welcome_text(None).starts_with("🎮 Welcome Player!"));
        assert!(welcome_text(Some("  ")).starts_with("🎮 Welcome Player!"));
    }
}
