//! Email syntax checking and domain typo suggestions.

use super::digits::normalize_persian_digits;
use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email syntax regex")
});

/// Misspelled provider domains and their corrections, checked in order.
pub const DOMAIN_TYPOS: [(&str, &str); 15] = [
    ("gmial.com", "gmail.com"),
    ("gmai.com", "gmail.com"),
    ("gmil.com", "gmail.com"),
    ("gmail.co", "gmail.com"),
    ("gmail.con", "gmail.com"),
    ("gmail.ocm", "gmail.com"),
    ("yahoo.co", "yahoo.com"),
    ("yahoo.con", "yahoo.com"),
    ("yaho.com", "yahoo.com"),
    ("yahooo.com", "yahoo.com"),
    ("hotmial.com", "hotmail.com"),
    ("hotmai.com", "hotmail.com"),
    ("hotmil.com", "hotmail.com"),
    ("outlok.com", "outlook.com"),
    ("outloook.com", "outlook.com"),
];

/// Domains offered as completions for a dot-less domain, first prefix match wins.
pub const COMMON_DOMAINS: [&str; 10] = [
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "mail.com",
    "protonmail.com",
    "icloud.com",
    "gmail.ir",
    "yahoo.ir",
    "chmail.ir",
];

/// Shortest dot-less domain that is completed from [`COMMON_DOMAINS`] is one
/// character longer than this.
const MIN_COMPLETION_PREFIX: usize = 3;

/// Whether an already-trimmed string looks like `local@domain.tld`.
///
/// Exactly one `@`, a non-empty local part, and a domain with a `.` that has
/// text on both sides. Whitespace is not allowed anywhere.
pub fn is_valid_syntax(email: &str) -> bool {
    EMAIL_SYNTAX.is_match(email)
}

/// Propose a corrected address for a common domain typo.
///
/// # Example
///
/// ```
/// use persian_form_input::domain::email::suggest_correction;
///
/// assert_eq!(suggest_correction("ali@gmial.com").as_deref(), Some("ali@gmail.com"));
/// assert_eq!(suggest_correction("ali@gmail").as_deref(), Some("ali@gmail.com"));
/// assert_eq!(suggest_correction("ali@example.com"), None);
/// ```
pub fn suggest_correction(email: &str) -> Option<String> {
    // The domain ends at a second '@', if any; text after it is dropped.
    let mut parts = email.split('@');
    let local_part = parts.next()?;
    let domain = parts.next()?;
    if domain.is_empty() {
        return None;
    }

    let lowered = domain.to_lowercase();

    if let Some((_, correct)) = DOMAIN_TYPOS.iter().find(|(typo, _)| *typo == lowered) {
        return Some(format!("{}@{}", local_part, correct));
    }

    // Length in UTF-16 code units, as browsers measure form text.
    if !domain.contains('.') && domain.encode_utf16().count() > MIN_COMPLETION_PREFIX {
        return COMMON_DOMAINS
            .iter()
            .find(|common| common.starts_with(lowered.as_str()))
            .map(|common| format!("{}@{}", local_part, common));
    }

    None
}

/// An email address taken from a form control.
///
/// Parsing normalizes Persian/Arabic glyphs and trims whitespace, but does
/// not reject anything; use [`EmailAddress::is_valid`] or
/// [`EmailAddress::into_valid`] to gate submission.
///
/// # Example
///
/// ```
/// use persian_form_input::domain::EmailAddress;
///
/// let email = EmailAddress::parse(" ali٪gmail.com ");
/// assert_eq!(email.normalized(), "ali@gmail.com");
/// assert_eq!(email.local_part(), "ali");
/// assert_eq!(email.domain(), Some("gmail.com"));
/// assert!(email.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize and trim raw control text.
    pub fn parse(input: &str) -> Self {
        Self(normalize_persian_digits(input).trim().to_string())
    }

    pub fn normalized(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the local part (before the first '@'), or the whole text when there is none.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }

    /// Get the domain part (after the first '@').
    pub fn domain(&self) -> Option<&str> {
        self.0.split_once('@').map(|(_, domain)| domain)
    }

    pub fn is_valid(&self) -> bool {
        is_valid_syntax(&self.0)
    }

    pub fn suggestion(&self) -> Option<String> {
        suggest_correction(&self.0)
    }

    /// Convert into the normalized address if it passes the syntax check.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the syntax check fails.
    pub fn into_valid(self) -> Result<String, ValidationError> {
        if self.is_valid() {
            Ok(self.0)
        } else {
            Err(ValidationError::InvalidEmail(self.0))
        }
    }
}

// Serde support - serialize as the normalized string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(EmailAddress::parse(&s))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
