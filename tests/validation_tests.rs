use leaderboard_bot::bot::keyboards::CallbackAction;
use leaderboard_bot::utils::markdown::escape_markdown;
use leaderboard_bot::utils::validation::{parse_score_submission, ScoreSubmission};

#[test]
fn test_score_submission_with_rank() {
    let submission = parse_score_submission(r#"{"score": 420, "rank": 3}"#).unwrap();
    assert_eq!(submission, ScoreSubmission { score: 420, rank: Some(3) });
}

#[test]
fn test_score_submission_without_rank() {
    let submission = parse_score_submission(r#"  {"score": 0}  "#).unwrap();
    assert_eq!(submission.score, 0);
    assert_eq!(submission.rank, None);
}

#[test]
fn test_score_submission_rejects_bad_payloads() {
    assert!(parse_score_submission("").is_err());
    assert!(parse_score_submission("not json").is_err());
    assert!(parse_score_submission(r#"{"rank": 1}"#).is_err());
    assert!(parse_score_submission(r#"{"score": "high"}"#).is_err());

    let negative = parse_score_submission(r#"{"score": -1}"#).unwrap_err();
    assert!(negative.to_string().contains("negative"));

    let zero_rank = parse_score_submission(r#"{"score": 10, "rank": 0}"#).unwrap_err();
    assert!(zero_rank.to_string().contains("Rank"));
}

#[test]
fn test_score_submission_size_limit() {
    let padded = format!(r#"{{"score": 1, "pad": "{}"}}"#, "x".repeat(5000));
    let err = parse_score_submission(&padded).unwrap_err();
    assert!(err.to_string().contains("too large"));
}

#[test]
fn test_callback_tokens_match_button_data() {
    assert_eq!(CallbackAction::parse("leaderboard"), Some(CallbackAction::Leaderboard));
    assert_eq!(CallbackAction::parse("group_leaderboard"), Some(CallbackAction::GroupLeaderboard));
    assert_eq!(CallbackAction::parse("Leaderboard"), None);
}

#[test]
fn test_escape_markdown_player_names() {
    assert_eq!(escape_markdown("@mr_smith"), "@mr\\_smith");
    assert_eq!(escape_markdown("Jean-Luc (captain)"), "Jean\\-Luc \\(captain\\)");
    assert_eq!(escape_markdown("Zoë"), "Zoë");
}
