//! Advisory health counters for the engine bridge.
//!
//! Shared across concurrent requests; never consulted when routing.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

use crate::error::EngineFailure;

/// Consecutive primary failures at which the bridge is reported failing.
pub const FAILING_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Failing,
}

impl HealthStatus {
    fn from_consecutive(n: u32) -> Self {
        match n {
            0 => Self::Healthy,
            n if n < FAILING_THRESHOLD => Self::Degraded,
            _ => Self::Failing,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => f.write_str("healthy"),
            Self::Degraded => f.write_str("degraded"),
            Self::Failing => f.write_str("failing"),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub total_requests: u64,
    /// Failed engine attempts, either tier.
    pub total_failures: u64,
    pub fallback_successes: u64,
    /// Primary failures since the last primary success.
    pub consecutive_failures: u32,
    pub last_failure: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct LastFailure {
    at: Option<DateTime<Utc>>,
    error: Option<String>,
}

#[derive(Debug, Default)]
pub struct HealthTracker {
    total_requests: AtomicU64,
    total_failures: AtomicU64,
    fallback_successes: AtomicU64,
    consecutive_failures: AtomicU32,
    last: Mutex<LastFailure>,
}

impl HealthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Primary answered. Returns the new status if this changed it.
    pub fn record_primary_success(&self) -> Option<HealthStatus> {
        let before = self.consecutive_failures.swap(0, Ordering::Relaxed);
        (before > 0).then_some(HealthStatus::Healthy)
    }

    /// Primary failed. Returns the new status if this changed it.
    pub fn record_primary_failure(&self, failure: &EngineFailure) -> Option<HealthStatus> {
        self.note_failure(failure);
        let before = self.consecutive_failures.fetch_add(1, Ordering::Relaxed);
        let old = HealthStatus::from_consecutive(before);
        let new = HealthStatus::from_consecutive(before.saturating_add(1));
        (old != new).then_some(new)
    }

    pub fn record_fallback_success(&self) {
        self.fallback_successes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_failure(&self, failure: &EngineFailure) {
        self.note_failure(failure);
    }

    pub fn status(&self) -> HealthStatus {
        HealthStatus::from_consecutive(self.consecutive_failures.load(Ordering::Relaxed))
    }

    pub fn report(&self) -> HealthReport {
        let last = self.last.lock();
        HealthReport {
            status: self.status(),
            total_requests: self.total_requests.load(Ordering::Relaxed),
            total_failures: self.total_failures.load(Ordering::Relaxed),
            fallback_successes: self.fallback_successes.load(Ordering::Relaxed),
            consecutive_failures: self.consecutive_failures.load(Ordering::Relaxed),
            last_failure: last.at,
            last_error: last.error.clone(),
        }
    }

    fn note_failure(&self, failure: &EngineFailure) {
        self.total_failures.fetch_add(1, Ordering::Relaxed);
        let mut last = self.last.lock();
        last.at = Some(Utc::now());
        last.error = Some(failure.to_string());
    }
}
