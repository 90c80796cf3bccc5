use leaderboard_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

const BOT_NAME: &str = "testbot";

#[test]
fn test_parse_start_and_help() {
    assert_eq!(Command::parse("/start", BOT_NAME).unwrap(), Command::Start);
    assert_eq!(Command::parse("/help", BOT_NAME).unwrap(), Command::Help);
}

#[test]
fn test_parse_leaderboard() {
    assert_eq!(Command::parse("/leaderboard", BOT_NAME).unwrap(), Command::Leaderboard);
}

#[test]
fn test_parse_group_leaderboard_uses_lowercase_name() {
    assert_eq!(
        Command::parse("/groupleaderboard", BOT_NAME).unwrap(),
        Command::GroupLeaderboard
    );
    assert!(Command::parse("/group_leaderboard", BOT_NAME).is_err());
}

#[test]
fn test_parse_command_addressed_to_bot() {
    assert_eq!(
        Command::parse("/leaderboard@testbot", BOT_NAME).unwrap(),
        Command::Leaderboard
    );
    assert!(Command::parse("/leaderboard@otherbot", BOT_NAME).is_err());
}

#[test]
fn test_parse_unknown_commands() {
    assert!(Command::parse("/schedule", BOT_NAME).is_err());
    assert!(Command::parse("/stats", BOT_NAME).is_err());
    assert!(Command::parse("leaderboard", BOT_NAME).is_err());
}

#[test]
fn test_help_lists_every_command() {
    let help = Command::descriptions().to_string();

    for command in ["/help", "/start", "/leaderboard", "/groupleaderboard"] {
        assert!(help.contains(command), "help text is missing {command}");
    }
}
