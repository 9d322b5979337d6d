//! Email validation tools.

use crate::form::messages::email_validity_message;
use crate::form::{assess_email, FieldStatus};
use crate::observability::MetricsTracker;
use serde::Serialize;

/// Result of checking an email control value.
#[derive(Debug, Clone, Serialize)]
pub struct EmailCheckResponse {
    /// Input after Persian/Arabic glyph normalization
    pub normalized: String,

    pub status: FieldStatus,

    /// Validity badge text
    pub badge: &'static str,

    /// Whether the error line should be visible
    pub show_error: bool,

    /// Corrected address for a common domain typo
    pub suggestion: Option<String>,

    /// Validation message for a blocked submission
    pub validity_message: Option<&'static str>,
}

/// Tools for email controls.
#[derive(Debug, Clone)]
pub struct EmailTools {
    metrics: MetricsTracker,
    suggestion_min_length: usize,
}

impl EmailTools {
    /// Create email tools.
    ///
    /// # Arguments
    /// * `metrics` - Shared metrics tracker
    /// * `suggestion_min_length` - Characters required before errors and suggestions show
    pub fn new(metrics: MetricsTracker, suggestion_min_length: usize) -> Self {
        Self {
            metrics,
            suggestion_min_length,
        }
    }

    /// Normalize, validate and suggest a correction for an email control value.
    pub fn check_email(&self, input: &str) -> EmailCheckResponse {
        let feedback = assess_email(input, self.suggestion_min_length);
        self.metrics.track_email_check(
            feedback.status == FieldStatus::Valid,
            feedback.suggestion.is_some(),
        );

        EmailCheckResponse {
            validity_message: email_validity_message(&feedback.normalized),
            badge: feedback.badge(),
            normalized: feedback.normalized,
            status: feedback.status,
            show_error: feedback.show_error,
            suggestion: feedback.suggestion,
        }
    }

    /// Map Persian/Arabic digits and "at" look-alikes to ASCII.
    pub fn normalize_digits(&self, input: &str) -> String {
        crate::domain::normalize_persian_digits(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_email_with_suggestion() {
        let metrics = MetricsTracker::new();
        let tools = EmailTools::new(metrics.clone(), 5);
        let response = tools.check_email("ali@gmial.co");

        assert_eq!(response.status, FieldStatus::Valid);
        assert_eq!(response.suggestion, None);

        let response = tools.check_email("ali@hotmai");
        assert_eq!(response.status, FieldStatus::Invalid);
        assert_eq!(response.suggestion.as_deref(), Some("ali@hotmail.com"));
        assert!(response.validity_message.is_some());

        assert_eq!(metrics.email_checks_total(), 2);
        assert_eq!(metrics.suggestions_offered_total(), 1);
    }

    #[test]
    fn test_normalize_digits() {
        let tools = EmailTools::new(MetricsTracker::new(), 5);
        assert_eq!(tools.normalize_digits("۰۹۱۲"), "0912");
    }
}
