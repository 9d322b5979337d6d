//! Phone formatting tools.

use crate::domain::PhoneKind;
use crate::form::{assess_phone, FieldStatus};
use crate::form::messages::PHONE_INVALID;
use crate::observability::MetricsTracker;
use serde::Serialize;

/// Result of checking a phone control value.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneCheckResponse {
    /// Digits extracted from the input
    pub digits: String,

    /// Kind of number the digits form
    pub kind: PhoneKind,

    /// Grouped display form
    pub formatted: String,

    pub status: FieldStatus,

    /// Validity badge text
    pub badge: String,

    /// Stored form, present only for a valid number
    pub canonical: Option<String>,

    /// Error text to show under the control, if any
    pub error_message: Option<&'static str>,
}

/// Tools for phone number controls.
#[derive(Debug, Clone)]
pub struct PhoneTools {
    metrics: MetricsTracker,
}

impl PhoneTools {
    pub fn new(metrics: MetricsTracker) -> Self {
        Self { metrics }
    }

    /// Classify, format and validate a phone control value.
    pub fn check_phone(&self, input: &str) -> PhoneCheckResponse {
        let feedback = assess_phone(input);
        let valid = feedback.status == FieldStatus::Valid;
        self.metrics.track_phone_check(valid);

        PhoneCheckResponse {
            canonical: valid.then(|| crate::domain::normalize_for_submission(&feedback.digits)),
            error_message: feedback.show_error().then_some(PHONE_INVALID),
            badge: feedback.badge(),
            digits: feedback.digits,
            kind: feedback.kind,
            formatted: feedback.formatted,
            status: feedback.status,
        }
    }
}
