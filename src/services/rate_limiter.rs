//! Per-user cooldown for leaderboard requests

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Default minimum interval between two leaderboard requests from one user.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(3000);
/// Default cap on the number of users tracked at once.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

#[derive(Debug, Default)]
struct Entries {
    last_admitted: HashMap<u64, Instant>,
    // Admission order. May hold stale pairs for users admitted again later;
    // a pair is only live while it matches `last_admitted`.
    order: VecDeque<(Instant, u64)>,
}

impl Entries {
    fn sweep(&mut self, now: Instant, cooldown: Duration) {
        while let Some(&(admitted_at, user_id)) = self.order.front() {
            if now.saturating_duration_since(admitted_at) < cooldown {
                break;
            }
            self.order.pop_front();
            if self.last_admitted.get(&user_id) == Some(&admitted_at) {
                self.last_admitted.remove(&user_id);
            }
        }
    }
}

/// Cooldown gate keyed by Telegram user id.
///
/// Entries expire once their cooldown has elapsed and the map never holds
/// more than `max_entries` users. While the map is full of users still in
/// their cooldown, new users are turned away rather than evicting anyone.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    cooldown: Duration,
    max_entries: usize,
    entries: Arc<Mutex<Entries>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl RateLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self::with_capacity(cooldown, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_capacity(cooldown: Duration, max_entries: usize) -> Self {
        Self {
            cooldown,
            max_entries: max_entries.max(1),
            entries: Arc::new(Mutex::new(Entries::default())),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Returns true and records `now` when the user is outside their cooldown.
    /// A rejected call leaves the stored timestamp untouched.
    pub fn admit(&self, user_id: u64, now: Instant) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.sweep(now, self.cooldown);

        if let Some(last) = entries.last_admitted.get(&user_id) {
            if now.saturating_duration_since(*last) < self.cooldown {
                return false;
            }
        }

        // After the sweep every remaining entry is still cooling down
        if !entries.last_admitted.contains_key(&user_id)
            && entries.last_admitted.len() >= self.max_entries
        {
            return false;
        }

        entries.last_admitted.insert(user_id, now);
        entries.order.push_back((now, user_id));
        true
    }

    /// Time left before `user_id` is admitted again.
    pub fn remaining(&self, user_id: u64, now: Instant) -> Duration {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .last_admitted
            .get(&user_id)
            .map(|last| self.cooldown.saturating_sub(now.saturating_duration_since(*last)))
            .unwrap_or_default()
    }

    /// Users still inside their cooldown at `now`.
    pub fn active_users(&self, now: Instant) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .last_admitted
            .values()
            .filter(|last| now.saturating_duration_since(**last) < self.cooldown)
            .count()
    }

    /// Users currently inside their cooldown.
    pub fn len(&self) -> usize {
        self.active_users(Instant::now())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: u64 = 42;

    #[test]
    fn test_second_request_within_cooldown_is_rejected() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        assert!(limiter.admit(USER, start));
        assert!(!limiter.admit(USER, start + Duration::from_millis(2999)));
    }

    #[test]
    fn test_requests_a_full_cooldown_apart_are_admitted() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        assert!(limiter.admit(USER, start));
        assert!(limiter.admit(USER, start + Duration::from_millis(3000)));
        assert!(limiter.admit(USER, start + Duration::from_millis(9000)));
    }

    #[test]
    fn test_rejection_does_not_extend_cooldown() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        assert!(limiter.admit(USER, start));
        assert!(!limiter.admit(USER, start + Duration::from_millis(2500)));
        assert!(limiter.admit(USER, start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_users_are_limited_independently() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        assert!(limiter.admit(1, start));
        assert!(limiter.admit(2, start + Duration::from_millis(10)));
        assert!(!limiter.admit(1, start + Duration::from_millis(20)));
    }

    fn stored_entries(limiter: &RateLimiter) -> usize {
        limiter.entries.lock().unwrap().last_admitted.len()
    }

    #[test]
    fn test_expired_entries_are_swept() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        for user in 0..100 {
            assert!(limiter.admit(user, start));
        }
        assert_eq!(stored_entries(&limiter), 100);

        assert!(limiter.admit(1000, start + Duration::from_secs(4)));
        assert_eq!(stored_entries(&limiter), 1);
    }

    #[test]
    fn test_full_limiter_rejects_new_users_without_evicting() {
        let limiter = RateLimiter::with_capacity(DEFAULT_COOLDOWN, 2);
        let start = Instant::now();

        assert!(limiter.admit(1, start));
        assert!(limiter.admit(2, start + Duration::from_millis(1)));
        assert!(!limiter.admit(3, start + Duration::from_millis(2)));

        // Nobody lost their cooldown to make room
        assert!(!limiter.admit(1, start + Duration::from_millis(3)));
        assert!(!limiter.admit(2, start + Duration::from_millis(3)));
        assert_eq!(stored_entries(&limiter), 2);

        // User 1 expires at +3000ms and frees a slot
        assert!(limiter.admit(3, start + Duration::from_millis(3000)));
        assert!(!limiter.admit(4, start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_active_users_ignores_expired_entries() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        assert!(limiter.admit(1, start));
        assert!(limiter.admit(2, start + Duration::from_millis(2000)));

        assert_eq!(limiter.active_users(start + Duration::from_millis(100)), 2);
        // No admit since, so nothing was swept, yet user 1 no longer counts
        assert_eq!(limiter.active_users(start + Duration::from_millis(3500)), 1);
        assert_eq!(limiter.active_users(start + Duration::from_secs(10)), 0);
        assert_eq!(stored_entries(&limiter), 2);
    }

    #[test]
    fn test_remaining_cooldown() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        assert_eq!(limiter.remaining(USER, start), Duration::ZERO);
        assert!(limiter.admit(USER, start));
        assert_eq!(
            limiter.remaining(USER, start + Duration::from_millis(1000)),
            Duration::from_millis(2000)
        );
    }

    #[test]
    fn test_concurrent_admits_for_one_user_admit_once() {
        let limiter = RateLimiter::default();
        let now = Instant::now();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = limiter.clone();
                std::thread::spawn(move || limiter.admit(USER, now))
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|admitted| *admitted)
            .count();
        assert_eq!(admitted, 1);
    }
}
