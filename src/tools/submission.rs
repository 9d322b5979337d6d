//! Submission tools backed by one guard per form.
//!
//! Forms are identified by a caller-chosen id. Each id gets its own
//! [`FormController`], created on first use, so forms never share state.

use crate::error::{FormField, SubmitError};
use crate::form::{FormController, Submission};
use crate::observability::{MetricsTracker, Timer};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Outcome of a submission attempt.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub form_id: String,
    pub accepted: bool,

    /// Stored values, present when accepted
    pub submission: Option<Submission>,

    /// Why the submission was refused
    pub error: Option<String>,

    /// Control the UI should focus after a refusal
    pub focus: Option<FormField>,
}

/// Current guard state of a form.
#[derive(Debug, Clone, Serialize)]
pub struct FormStatusResponse {
    pub form_id: String,
    pub submitting: bool,
    pub overlay_due: bool,
}

#[derive(Clone)]
pub struct SubmissionTools {
    forms: Arc<RwLock<HashMap<String, FormController>>>,
    overlay_delay: Duration,
    metrics: MetricsTracker,
}

impl SubmissionTools {
    /// Create submission tools.
    ///
    /// # Arguments
    /// * `overlay_delay` - Delay before a submitting form's overlay is due
    /// * `metrics` - Shared metrics tracker
    pub fn new(overlay_delay: Duration, metrics: MetricsTracker) -> Self {
        Self {
            forms: Arc::new(RwLock::new(HashMap::new())),
            overlay_delay,
            metrics,
        }
    }

    /// Validate a customer form and start its submission.
    ///
    /// Refusals are part of the response rather than an `Err`; the form
    /// stays idle unless it was already submitting.
    pub async fn begin_submission(
        &self,
        form_id: &str,
        phone: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> SubmissionResponse {
        let timer = Timer::new("begin_submission");

        let result = {
            let mut forms = self.forms.write().await;
            forms
                .entry(form_id.to_string())
                .or_insert_with(|| FormController::new(self.overlay_delay))
                .begin_submission(phone, email, now)
        };

        timer.finish();
        self.metrics.track_submission(result.is_ok());

        match result {
            Ok(submission) => SubmissionResponse {
                form_id: form_id.to_string(),
                accepted: true,
                submission: Some(submission),
                error: None,
                focus: None,
            },
            Err(e) => {
                tracing::warn!(form_id = %form_id, error = %e, "Submission refused");
                Self::refused(form_id, &e)
            }
        }
    }

    fn refused(form_id: &str, err: &SubmitError) -> SubmissionResponse {
        SubmissionResponse {
            form_id: form_id.to_string(),
            accepted: false,
            submission: None,
            error: Some(err.to_string()),
            focus: err.focus_field(),
        }
    }

    /// Reset a form after the page was restored from history.
    ///
    /// Returns whether the form had a submission in flight. Unknown forms
    /// are treated as idle.
    pub async fn restore_form(&self, form_id: &str) -> bool {
        let mut forms = self.forms.write().await;
        forms
            .get_mut(form_id)
            .map(|form| form.restore_from_history())
            .unwrap_or(false)
    }

    pub async fn form_status(&self, form_id: &str, now: DateTime<Utc>) -> FormStatusResponse {
        let forms = self.forms.read().await;
        let (submitting, overlay_due) = forms
            .get(form_id)
            .map(|form| (form.is_submitting(), form.overlay_due(now)))
            .unwrap_or((false, false));

        FormStatusResponse {
            form_id: form_id.to_string(),
            submitting,
            overlay_due,
        }
    }
}
