//! Form-level behavior built on the domain rules.
//!
//! - **feedback**: what each control shows after an input event
//! - **controller**: the per-form submission guard
//! - **messages**: Persian validity texts

pub mod controller;
pub mod feedback;
pub mod messages;

pub use controller::{FormController, Submission, SubmissionState};
pub use feedback::{
    assess_email, assess_phone, initial_phone_display, EmailFeedback, FieldStatus, PhoneFeedback,
};
