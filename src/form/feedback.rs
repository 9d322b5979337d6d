//! Per-keystroke feedback for the phone and email controls.
//!
//! Each function takes the current control text and returns what the form
//! should show: the reformatted value, the validity badge, and whether an
//! error line or a suggestion is visible. Rendering is left to the caller.

use super::messages::{BADGE_INVALID, BADGE_VALID_EMAIL};
use crate::domain::{phone, EmailAddress, PhoneKind, PhoneNumber};
use serde::Serialize;

/// Validity of a control's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Nothing typed yet; no badge and no error.
    Empty,
    Valid,
    Invalid,
}

/// What the phone control should display after an input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneFeedback {
    pub digits: String,
    pub formatted: String,
    pub kind: PhoneKind,
    pub status: FieldStatus,
}

impl PhoneFeedback {
    /// Badge text: empty, `✓ <kind>` or `✗ نامعتبر`.
    pub fn badge(&self) -> String {
        match (self.status, self.kind.label()) {
            (FieldStatus::Empty, _) => String::new(),
            (FieldStatus::Valid, Some(label)) => format!("✓ {}", label),
            _ => BADGE_INVALID.to_string(),
        }
    }

    /// The error line under the control is shown only for invalid input.
    pub fn show_error(&self) -> bool {
        self.status == FieldStatus::Invalid
    }
}

/// What the email control should display after an input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailFeedback {
    /// Control text after glyph normalization (not trimmed).
    pub normalized: String,
    pub status: FieldStatus,
    pub show_error: bool,
    pub suggestion: Option<String>,
}

impl EmailFeedback {
    pub fn badge(&self) -> &'static str {
        match self.status {
            FieldStatus::Empty => "",
            FieldStatus::Valid => BADGE_VALID_EMAIL,
            FieldStatus::Invalid => BADGE_INVALID,
        }
    }

    /// Whether normalization changed the control text, so it must be written back.
    pub fn rewrites(&self, input: &str) -> bool {
        self.normalized != input
    }
}

/// Compute phone feedback for the current control text.
pub fn assess_phone(input: &str) -> PhoneFeedback {
    let phone = PhoneNumber::from_input(input);
    let status = if phone.is_empty() {
        FieldStatus::Empty
    } else if phone.is_valid() {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    };

    tracing::debug!(
        kind = %phone.kind(),
        digit_count = phone.digits().len(),
        "Phone input assessed"
    );

    PhoneFeedback {
        formatted: phone.formatted(),
        kind: phone.kind(),
        digits: phone.digits().to_string(),
        status,
    }
}

/// Compute email feedback for the current control text.
///
/// Errors and suggestions stay hidden until the trimmed address is longer
/// than `suggestion_min_length`, so the user is not nagged mid-word.
pub fn assess_email(input: &str, suggestion_min_length: usize) -> EmailFeedback {
    let normalized = crate::domain::normalize_persian_digits(input);
    let email = EmailAddress::parse(&normalized);

    if email.is_empty() {
        return EmailFeedback {
            normalized,
            status: FieldStatus::Empty,
            show_error: false,
            suggestion: None,
        };
    }

    if email.is_valid() {
        return EmailFeedback {
            normalized,
            status: FieldStatus::Valid,
            show_error: false,
            suggestion: None,
        };
    }

    let long_enough = email.normalized().chars().count() > suggestion_min_length;
    let suggestion = if long_enough { email.suggestion() } else { None };

    tracing::debug!(
        show_error = long_enough,
        has_suggestion = suggestion.is_some(),
        "Invalid email input assessed"
    );

    EmailFeedback {
        normalized,
        status: FieldStatus::Invalid,
        show_error: long_enough,
        suggestion,
    }
}

/// Display form for a value already stored in the control when the page loads.
///
/// Only an 11-digit value is rewritten: a mobile or landline number is
/// regrouped, any other 11 digits are shown without separators. Values of
/// other lengths are left alone.
pub fn initial_phone_display(stored: &str) -> String {
    let digits = crate::domain::extract_digits(stored);
    if digits.len() != 11 {
        return stored.to_string();
    }

    match phone::classify(&digits) {
        PhoneKind::Mobile | PhoneKind::Landline => phone::format(&digits),
        _ => digits,
    }
}
