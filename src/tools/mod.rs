//! MCP tools for form input handling.
//!
//! This module provides three categories of tools:
//! - **Phone**: Classify, format and validate phone numbers
//! - **Email**: Validate emails, normalize glyphs, suggest typo corrections
//! - **Submission**: Per-form duplicate-submission guard

pub mod email;
pub mod phone;
pub mod submission;

pub use email::{EmailCheckResponse, EmailTools};
pub use phone::{PhoneCheckResponse, PhoneTools};
pub use submission::{FormStatusResponse, SubmissionResponse, SubmissionTools};
