pub mod leaderboard;
pub mod start;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Leaderboard Bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot and get the game button")]
    Start,
    #[command(description = "Show the global top 10")]
    Leaderboard,
    #[command(description = "Show the top 10 for this group")]
    GroupLeaderboard,
}
