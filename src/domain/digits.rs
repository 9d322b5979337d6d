//! Persian and Arabic-Indic glyph normalization.
//!
//! Keyboards in a Persian locale emit `۰`-`۹` (or Arabic-Indic `٠`-`٩`) for
//! digits and sometimes `＠`/`٪` where the user meant `@`. Both phone and email
//! inputs go through this mapping before any other rule runs.

/// Map a single character to its ASCII equivalent, if it has one.
fn ascii_equivalent(c: char) -> Option<char> {
    match c {
        '۰'..='۹' => char::from_digit(c as u32 - '۰' as u32, 10),
        '٠'..='٩' => char::from_digit(c as u32 - '٠' as u32, 10),
        '＠' | '٪' => Some('@'),
        _ => None,
    }
}

/// Replace Persian digits, Arabic-Indic digits and "at" look-alikes with ASCII.
///
/// Every other character is left untouched, so the mapping is idempotent.
///
/// # Example
///
/// ```
/// use persian_form_input::domain::normalize_persian_digits;
///
/// assert_eq!(normalize_persian_digits("۰۹۱۲"), "0912");
/// assert_eq!(normalize_persian_digits("ali＠gmail.com"), "ali@gmail.com");
/// ```
pub fn normalize_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| ascii_equivalent(c).unwrap_or(c))
        .collect()
}

/// Keep only the decimal digits of `input`, after glyph normalization.
pub fn extract_digits(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match ascii_equivalent(c) {
            Some(mapped) if mapped.is_ascii_digit() => Some(mapped),
            Some(_) => None,
            None if c.is_ascii_digit() => Some(c),
            None => None,
        })
        .collect()
}
