use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fallback shown when a player has neither a username nor a first name.
pub const ANONYMOUS_PLAYER: &str = "Player";

/// One ranked row of the `leaderboard` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub score: i64,
    pub group_label: Option<String>,
}

impl ScoreRecord {
    /// `@username` when a username is known, otherwise the first name.
    pub fn display_name(&self) -> String {
        match self.username.as_deref().map(str::trim) {
            Some(username) if !username.is_empty() => format!("@{username}"),
            _ => self
                .first_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(ANONYMOUS_PLAYER)
                .to_string(),
        }
    }

    /// Highest scores first. Equal scores keep submission order.
    pub async fn top(
        pool: &sqlx::SqlitePool,
        group_label: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        match group_label {
            Some(label) => {
                sqlx::query_as::<_, ScoreRecord>(
                    "SELECT username, first_name, score, group_label
                     FROM leaderboard
                     WHERE group_label = ?
                     ORDER BY score DESC, created_at ASC, id ASC
                     LIMIT ?"
                )
                .bind(label)
                .bind(limit)
                .fetch_all(pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ScoreRecord>(
                    "SELECT username, first_name, score, group_label
                     FROM leaderboard
                     ORDER BY score DESC, created_at ASC, id ASC
                     LIMIT ?"
                )
                .bind(limit)
                .fetch_all(pool)
                .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: Option<&str>, first_name: Option<&str>) -> ScoreRecord {
        ScoreRecord {
            username: username.map(String::from),
            first_name: first_name.map(String::from),
            score: 10,
            group_label: None,
        }
    }

    #[test]
    fn test_display_name_prefers_username() {
        assert_eq!(record(Some("alice"), Some("Alice")).display_name(), "@alice");
    }

    #[test]
    fn test_display_name_falls_back_to_first_name() {
        assert_eq!(record(Some(""), Some("Bob")).display_name(), "Bob");
        assert_eq!(record(None, Some("Bob")).display_name(), "Bob");
    }

    #[test]
    fn test_display_name_anonymous() {
        assert_eq!(record(None, None).display_name(), ANONYMOUS_PLAYER);
        assert_eq!(record(Some("  "), Some("")).display_name(), ANONYMOUS_PLAYER);
    }
}
