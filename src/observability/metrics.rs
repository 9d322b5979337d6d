//! Counters for tool usage.
//!
//! Tracks how often each rule is exercised and how many submissions are
//! accepted or refused, so a running server can report its own activity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared metrics tracker; clones share the same counters.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    enabled: bool,
    phone_checks_total: Arc<AtomicU64>,
    email_checks_total: Arc<AtomicU64>,
    suggestions_offered_total: Arc<AtomicU64>,
    submissions_accepted_total: Arc<AtomicU64>,
    submissions_rejected_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// Create a tracker that counts nothing when `enabled` is false.
    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            phone_checks_total: Arc::new(AtomicU64::new(0)),
            email_checks_total: Arc::new(AtomicU64::new(0)),
            suggestions_offered_total: Arc::new(AtomicU64::new(0)),
            submissions_accepted_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
        }
    }

    fn bump(&self, counter: &AtomicU64) {
        if self.enabled {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Track a phone check.
    pub fn track_phone_check(&self, valid: bool) {
        self.bump(&self.phone_checks_total);
        tracing::trace!(valid = valid, "Phone check");
    }

    /// Track an email check and whether a suggestion was offered.
    pub fn track_email_check(&self, valid: bool, suggested: bool) {
        self.bump(&self.email_checks_total);
        if suggested {
            self.bump(&self.suggestions_offered_total);
        }
        tracing::trace!(valid = valid, suggested = suggested, "Email check");
    }

    /// Track the outcome of a submission attempt.
    pub fn track_submission(&self, accepted: bool) {
        if accepted {
            self.bump(&self.submissions_accepted_total);
        } else {
            self.bump(&self.submissions_rejected_total);
        }
    }

    pub fn phone_checks_total(&self) -> u64 {
        self.phone_checks_total.load(Ordering::Relaxed)
    }

    pub fn email_checks_total(&self) -> u64 {
        self.email_checks_total.load(Ordering::Relaxed)
    }

    pub fn suggestions_offered_total(&self) -> u64 {
        self.suggestions_offered_total.load(Ordering::Relaxed)
    }

    pub fn submissions_accepted_total(&self) -> u64 {
        self.submissions_accepted_total.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    /// Share of submission attempts that were refused (0.0 to 1.0).
    pub fn submission_rejection_rate(&self) -> f64 {
        let rejected = self.submissions_rejected_total() as f64;
        let total = (self.submissions_accepted_total() + self.submissions_rejected_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Phone Checks: {}\n\
             Email Checks: {}\n\
             Suggestions Offered: {}\n\
             Submissions Accepted: {}\n\
             Submissions Rejected: {} ({:.2}% rejection rate)",
            self.phone_checks_total(),
            self.email_checks_total(),
            self.suggestions_offered_total(),
            self.submissions_accepted_total(),
            self.submissions_rejected_total(),
            self.submission_rejection_rate() * 100.0,
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in microseconds.
    pub fn finish(self) -> u128 {
        let duration_us = self.start.elapsed().as_micros();

        tracing::debug!(
            operation = %self.operation,
            duration_us = duration_us,
            "Operation completed"
        );

        duration_us
    }
}
