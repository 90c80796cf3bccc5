use std::future::Future;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::database::connection::DatabaseManager;
use crate::database::models::ScoreRecord;
use crate::utils::logging::{log_database_error, log_database_operation, log_timeout};

/// Rows shown on one leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Which scores a leaderboard covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Global,
    /// Scores played inside one group, keyed by its group label.
    Group(String),
}

impl Scope {
    pub fn group_label(&self) -> Option<&str> {
        match self {
            Scope::Global => None,
            Scope::Group(label) => Some(label),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Group(_) => "group",
        }
    }
}

/// A failed fetch. Both variants are shown to the user as retryable.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("score query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("score query timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Read access to ranked scores.
pub trait ScoreSource: Send + Sync {
    fn top_scores(
        &self,
        scope: &Scope,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ScoreRecord>, sqlx::Error>> + Send;
}

impl ScoreSource for DatabaseManager {
    async fn top_scores(&self, scope: &Scope, limit: usize) -> Result<Vec<ScoreRecord>, sqlx::Error> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        ScoreRecord::top(&self.pool, scope.group_label(), limit).await
    }
}

/// Fetches leaderboards with a bounded wait.
#[derive(Debug, Clone)]
pub struct LeaderboardService<S> {
    source: S,
    timeout: Duration,
}

impl<S: ScoreSource> LeaderboardService<S> {
    pub fn new(source: S) -> Self {
        Self::with_timeout(source, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_timeout(source: S, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Top scores for `scope`, highest first.
    ///
    /// The query is not cancelled by anything but the timeout. Equal scores
    /// keep the order the source returned them in.
    pub async fn fetch(&self, scope: &Scope) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        let started = Instant::now();
        log_database_operation("SELECT top scores", "leaderboard", Some(scope.name()));

        let result = tokio::time::timeout(
            self.timeout,
            self.source.top_scores(scope, LEADERBOARD_SIZE),
        )
        .await;

        let mut rows = match result {
            Ok(Ok(rows)) => rows,
            Ok(Err(e)) => {
                log_database_error("SELECT top scores", "leaderboard", &e.to_string());
                return Err(LeaderboardError::Query(e));
            }
            Err(_) => {
                log_timeout("leaderboard query", started.elapsed().as_millis(), Some(scope.name()));
                return Err(LeaderboardError::Timeout(self.timeout));
            }
        };

        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows.truncate(LEADERBOARD_SIZE);
        Ok(rows)
    }
}
