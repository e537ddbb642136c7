//! Quota snapshot attached to rate limit errors.
//!
//! When GitHub refuses a request because the quota is exhausted, the gateway
//! reads `/rate_limit` and attaches the core quota to
//! [`QueryError::RateLimitExceeded`](super::QueryError::RateLimitExceeded).
//! Queries never wait for the reset; they fail and report it.

use std::fmt;

/// Core API quota as reported by GitHub.
///
/// # Example
///
/// ```
/// use pullsift::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 0, 1_700_000_000);
/// assert!(info.is_exhausted());
/// assert_eq!(info.resets_in(1_699_999_940), 60);
/// assert_eq!(info.to_string(), "0 of 5000 requests left, resets at 1700000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a quota snapshot; `reset_at` is a Unix timestamp in seconds.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Converts the word-sized counters Octocrab reports.
    ///
    /// Returns `None` when a counter does not fit in `u32`.
    #[must_use]
    pub fn from_counters(limit: usize, remaining: usize, reset_at: u64) -> Option<Self> {
        Some(Self::new(
            u32::try_from(limit).ok()?,
            u32::try_from(remaining).ok()?,
            reset_at,
        ))
    }

    /// Requests allowed per window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp at which the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true once the window is used up.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Seconds from `now` until the reset; zero if it has already passed.
    #[must_use]
    pub const fn resets_in(&self, now: u64) -> u64 {
        self.reset_at.saturating_sub(now)
    }
}

impl fmt::Display for RateLimitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{remaining} of {limit} requests left, resets at {reset}",
            remaining = self.remaining,
            limit = self.limit,
            reset = self.reset_at
        )
    }
}
