//! Iranian phone number classification and display grouping.

use super::digits::extract_digits;
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Landline area codes of the major cities. These are written 3-4-4
/// (`021 1234 5678`); every other landline uses a 4-digit area code.
pub const MAJOR_CITY_AREA_CODES: [&str; 8] =
    ["021", "026", "031", "041", "051", "061", "071", "034"];

/// Length of a complete number including the leading zero.
const FULL_LENGTH: usize = 11;

/// Offset of the last group in every grouping (both 4-3-4 and 3-4-4).
const LAST_GROUP_START: usize = 7;

/// The kind of number a digit string represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    /// 11 digits starting with `09`.
    Mobile,

    /// 10 digits starting with `9` (the leading zero was left off).
    MobileNoLeadingZero,

    /// 11 digits starting with `0` but not `09`.
    Landline,

    /// Anything else, including numbers that are still being typed.
    Unknown,
}

impl PhoneKind {
    /// Persian label shown next to a valid number.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Mobile | Self::MobileNoLeadingZero => Some("موبایل"),
            Self::Landline => Some("ثابت"),
            Self::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::MobileNoLeadingZero => "mobile_no_leading_zero",
            Self::Landline => "landline",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a digit string. First matching rule wins.
pub fn classify(raw_digits: &str) -> PhoneKind {
    match raw_digits.len() {
        11 if raw_digits.starts_with("09") => PhoneKind::Mobile,
        11 if raw_digits.starts_with('0') => PhoneKind::Landline,
        10 if raw_digits.starts_with('9') => PhoneKind::MobileNoLeadingZero,
        _ => PhoneKind::Unknown,
    }
}

/// Whether the digits form a number the forms accept.
pub fn is_valid(raw_digits: &str) -> bool {
    match raw_digits.len() {
        11 => raw_digits.starts_with('0'),
        10 => raw_digits.starts_with('9'),
        _ => false,
    }
}

/// Canonical stored form: a 10-digit mobile gets its leading zero back.
pub fn normalize_for_submission(raw_digits: &str) -> String {
    if raw_digits.len() == 10 && raw_digits.starts_with('9') {
        format!("0{}", raw_digits)
    } else {
        raw_digits.to_string()
    }
}

fn has_major_city_area_code(digits: &str) -> bool {
    MAJOR_CITY_AREA_CODES
        .iter()
        .any(|code| digits.starts_with(code))
}

/// Split `digits` into up to three space-separated groups.
///
/// The first group ends at `first`, the second at offset 7. With a `limit`
/// the digits past it are dropped; without one the last group keeps them all.
fn group(digits: &str, first: usize, limit: Option<usize>) -> String {
    let end = limit.map_or(digits.len(), |limit| digits.len().min(limit));
    let digits = &digits[..end];

    if digits.len() <= first {
        digits.to_string()
    } else if digits.len() <= LAST_GROUP_START {
        format!("{} {}", &digits[..first], &digits[first..])
    } else {
        format!(
            "{} {} {}",
            &digits[..first],
            &digits[first..LAST_GROUP_START],
            &digits[LAST_GROUP_START..]
        )
    }
}

/// Produce the space-grouped display form of a digit string.
///
/// Non-digit characters are ignored. A 10-digit mobile is shown with its
/// leading zero restored.
///
/// # Example
///
/// ```
/// use persian_form_input::domain::phone::format;
///
/// assert_eq!(format("09123456789"), "0912 345 6789");
/// assert_eq!(format("02112345678"), "021 1234 5678");
/// assert_eq!(format("0912345"), "0912 345");
/// ```
pub fn format(raw_digits: &str) -> String {
    let digits = extract_digits(raw_digits);

    match classify(&digits) {
        PhoneKind::MobileNoLeadingZero => group(&format!("0{}", digits), 4, Some(FULL_LENGTH)),
        PhoneKind::Mobile => group(&digits, 4, Some(FULL_LENGTH)),
        PhoneKind::Landline => {
            let first = if has_major_city_area_code(&digits) { 3 } else { 4 };
            group(&digits, first, Some(FULL_LENGTH))
        }
        // Partial input: keep everything the user typed.
        PhoneKind::Unknown => group(&digits, 4, None),
    }
}

/// A phone number taken from a form control.
///
/// Construction never fails: the value keeps whatever digits were typed and
/// reports its kind and validity. [`PhoneNumber::canonical`] is the gate used
/// at submission time.
///
/// # Example
///
/// ```
/// use persian_form_input::domain::{PhoneKind, PhoneNumber};
///
/// let phone = PhoneNumber::from_input("۹۱۲ ۳۴۵ ۶۷۸۹");
/// assert_eq!(phone.kind(), PhoneKind::MobileNoLeadingZero);
/// assert_eq!(phone.canonical().unwrap(), "09123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    digits: String,
    kind: PhoneKind,
}

impl PhoneNumber {
    /// Build from raw control text, keeping only its digits.
    pub fn from_input(input: &str) -> Self {
        let digits = extract_digits(input);
        let kind = classify(&digits);
        Self { digits, kind }
    }

    /// The extracted digits, exactly as typed.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn kind(&self) -> PhoneKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        is_valid(&self.digits)
    }

    /// The grouped display form.
    pub fn formatted(&self) -> String {
        format(&self.digits)
    }

    /// The form stored on submission.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the digits are not a valid number.
    pub fn canonical(&self) -> Result<String, ValidationError> {
        let normalized = normalize_for_submission(&self.digits);
        if is_valid(&normalized) {
            Ok(normalized)
        } else {
            Err(ValidationError::InvalidPhone(self.digits.clone()))
        }
    }
}

// Serde support - serialize as the digit string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.digits.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PhoneNumber::from_input(&s))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("09123456789"), PhoneKind::Mobile);
        assert_eq!(classify("02112345678"), PhoneKind::Landline);
        assert_eq!(classify("9123456789"), PhoneKind::MobileNoLeadingZero);
        assert_eq!(classify("0912345678"), PhoneKind::Unknown);
        assert_eq!(classify("19123456789"), PhoneKind::Unknown);
        assert_eq!(classify(""), PhoneKind::Unknown);
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("09123456789"));
        assert!(is_valid("02412345678"));
        assert!(is_valid("9123456789"));
        assert!(!is_valid("8123456789"));
        assert!(!is_valid("0912345"));
        assert!(!is_valid("091234567890"));
    }

    #[test]
    fn test_normalize_for_submission() {
        assert_eq!(normalize_for_submission("9123456789"), "09123456789");
        assert_eq!(normalize_for_submission("09123456789"), "09123456789");
        assert_eq!(normalize_for_submission("812"), "812");
    }

    #[test]
    fn test_format_complete_numbers() {
        assert_eq!(format("09123456789"), "0912 345 6789");
        assert_eq!(format("9123456789"), "0912 345 6789");
        assert_eq!(format("02144556677"), "021 4455 6677");
        assert_eq!(format("03133445566"), "031 3344 5566");
        assert_eq!(format("02413334444"), "0241 333 4444");
    }

    #[test]
    fn test_format_while_typing() {
        assert_eq!(format(""), "");
        assert_eq!(format("09"), "09");
        assert_eq!(format("0912"), "0912");
        assert_eq!(format("09123"), "0912 3");
        assert_eq!(format("0912345"), "0912 345");
        assert_eq!(format("09123456"), "0912 345 6");
        assert_eq!(format("0212345678"), "0212 345 678");
    }

    #[test]
    fn test_format_unknown_keeps_extra_digits() {
        assert_eq!(format("091234567890"), "0912 345 67890");
    }

    #[test]
    fn test_format_ignores_separators() {
        assert_eq!(format("0912-345-6789"), "0912 345 6789");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(PhoneKind::Mobile.label(), Some("موبایل"));
        assert_eq!(PhoneKind::MobileNoLeadingZero.label(), Some("موبایل"));
        assert_eq!(PhoneKind::Landline.label(), Some("ثابت"));
        assert_eq!(PhoneKind::Unknown.label(), None);
    }

    #[test]
    fn test_phone_number_value() {
        let phone = PhoneNumber::from_input("0912 345 6789");
        assert_eq!(phone.digits(), "09123456789");
        assert_eq!(phone.kind(), PhoneKind::Mobile);
        assert!(phone.is_valid());
        assert_eq!(phone.to_string(), "0912 345 6789");
    }

    #[test]
    fn test_phone_number_canonical() {
        assert_eq!(
            PhoneNumber::from_input("912 345 6789").canonical().unwrap(),
            "09123456789"
        );
        let err = PhoneNumber::from_input("12345").canonical().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
    }

    #[test]
    fn test_phone_number_serialization() {
        let phone = PhoneNumber::from_input("0912 345 6789");
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"09123456789\"");

        let back: PhoneNumber = serde_json::from_str("\"0912-345-6789\"").unwrap();
        assert_eq!(back, phone);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&PhoneKind::MobileNoLeadingZero).unwrap();
        assert_eq!(json, "\"mobile_no_leading_zero\"");
    }
}
