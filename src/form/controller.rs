//! Submission guard owned by a single form.
//!
//! Every form instance gets its own [`FormController`], so two forms on one
//! page never block each other. A controller admits at most one submission
//! at a time and is reset when the browser restores the page from its
//! back-navigation cache.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::error::{SubmitError, SubmitResult};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting { started_at: DateTime<Utc> },
}

/// Values accepted for submission, in their stored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub phone: String,
    pub email: String,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FormController {
    state: SubmissionState,
    overlay_delay: Duration,
}

impl FormController {
    /// Create an idle controller. `overlay_delay` is how long a submission
    /// runs before the blocking overlay is due.
    pub fn new(overlay_delay: Duration) -> Self {
        Self {
            state: SubmissionState::Idle,
            overlay_delay,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    /// Validate a customer form and, if it passes, mark it as submitting.
    ///
    /// The phone is checked before the email, and a 10-digit mobile is given
    /// its leading zero first. A rejected submission leaves the controller idle.
    ///
    /// # Errors
    ///
    /// - `SubmitError::AlreadySubmitting` while a previous submission is in flight
    /// - `SubmitError::InvalidPhone` / `SubmitError::InvalidEmail` for bad values
    pub fn begin_submission(
        &mut self,
        phone_input: &str,
        email_input: &str,
        now: DateTime<Utc>,
    ) -> SubmitResult<Submission> {
        self.ensure_idle()?;

        let phone = PhoneNumber::from_input(phone_input).canonical()?;
        let email = EmailAddress::parse(email_input).into_valid()?;

        self.state = SubmissionState::Submitting { started_at: now };
        tracing::info!(started_at = %now, "Form submission started");

        Ok(Submission {
            phone,
            email,
            started_at: now,
        })
    }

    /// Guard-only submission for forms without phone or email controls.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::AlreadySubmitting` while a previous submission is in flight.
    pub fn begin_plain_submission(&mut self, now: DateTime<Utc>) -> SubmitResult<()> {
        self.ensure_idle()?;
        self.state = SubmissionState::Submitting { started_at: now };
        tracing::info!(started_at = %now, "Form submission started");
        Ok(())
    }

    /// Whether the submission has run long enough to show the overlay.
    pub fn overlay_due(&self, now: DateTime<Utc>) -> bool {
        match self.state {
            SubmissionState::Idle => false,
            SubmissionState::Submitting { started_at } => now - started_at >= self.overlay_delay,
        }
    }

    /// Page restored from the history cache: make the form interactive again.
    ///
    /// Returns whether a submission had been in flight.
    pub fn restore_from_history(&mut self) -> bool {
        let was_submitting = self.is_submitting();
        self.state = SubmissionState::Idle;
        if was_submitting {
            tracing::debug!("Form restored from history while submitting");
        }
        was_submitting
    }

    fn ensure_idle(&self) -> SubmitResult<()> {
        if self.is_submitting() {
            tracing::warn!("Duplicate submission suppressed");
            return Err(SubmitError::AlreadySubmitting);
        }
        Ok(())
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Duration::milliseconds(300))
    }
}
