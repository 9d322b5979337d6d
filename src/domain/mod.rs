//! Domain value objects and input rules.
//!
//! This module contains the pure rules shared by every form binding: phone
//! classification and grouping, email syntax and typo suggestions, and the
//! Persian/Arabic glyph normalization both of them rely on. Nothing here
//! holds state or fails; invalid input maps to a negative result.

pub mod digits;
pub mod email;
pub mod errors;
pub mod phone;

pub use digits::{extract_digits, normalize_persian_digits};
pub use email::{is_valid_syntax, suggest_correction, EmailAddress};
pub use errors::ValidationError;
pub use phone::{classify, is_valid, normalize_for_submission, PhoneKind, PhoneNumber};
