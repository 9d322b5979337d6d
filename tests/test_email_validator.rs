//! Tests for email syntax, glyph normalization and typo suggestions.

use persian_form_input::domain::email::{COMMON_DOMAINS, DOMAIN_TYPOS};
use persian_form_input::domain::{
    is_valid_syntax, normalize_persian_digits, suggest_correction, EmailAddress,
};

#[test]
fn test_syntax_examples() {
    assert!(is_valid_syntax("user@gmail.com"));
    assert!(!is_valid_syntax("user@gmail"));
    assert!(!is_valid_syntax("user@@gmail.com"));
}

#[test]
fn test_every_typo_is_corrected() {
    for (typo, correct) in DOMAIN_TYPOS {
        let suggestion = suggest_correction(&format!("ali@{}", typo));
        assert_eq!(suggestion, Some(format!("ali@{}", correct)), "{}", typo);
    }
}

#[test]
fn test_corrections_are_themselves_clean() {
    for (_, correct) in DOMAIN_TYPOS {
        assert_eq!(suggest_correction(&format!("ali@{}", correct)), None);
    }
}

#[test]
fn test_completion_follows_list_order() {
    // "yahoo" is a prefix of both yahoo.com and yahoo.ir; the list puts .com first.
    assert_eq!(
        suggest_correction("ali@yahoo").as_deref(),
        Some("ali@yahoo.com")
    );
    assert_eq!(
        suggest_correction("ali@Gmail").as_deref(),
        Some("ali@gmail.com")
    );
    assert_eq!(
        suggest_correction("ali@icloud").as_deref(),
        Some("ali@icloud.com")
    );
    assert_eq!(COMMON_DOMAINS[0], "gmail.com");
}

#[test]
fn test_concrete_suggestions() {
    assert_eq!(
        suggest_correction("ali@gmial.com").as_deref(),
        Some("ali@gmail.com")
    );
    assert_eq!(
        suggest_correction("ali@gmail").as_deref(),
        Some("ali@gmail.com")
    );
}

#[test]
fn test_suggestion_ignores_text_after_second_at() {
    assert_eq!(
        suggest_correction("ali@gmial.com@").as_deref(),
        Some("ali@gmail.com")
    );
    assert_eq!(
        suggest_correction("ali@gmail@x").as_deref(),
        Some("ali@gmail.com")
    );
    assert!(!is_valid_syntax("ali@gmail@x"));
}

#[test]
fn test_normalization_examples() {
    assert_eq!(normalize_persian_digits("۰۹۱۲"), "0912");
    assert_eq!(normalize_persian_digits("علی٪yahoo.com"), "علی@yahoo.com");
}

#[test]
fn test_normalization_idempotent_over_mixed_text() {
    let samples = [
        "",
        "۰۱۲۳۴۵۶۷۸۹",
        "٠١٢٣٤٥٦٧٨٩",
        "user＠mail.com",
        "ایمیل: ali۱۳۷۰٪gmail.com",
        "plain@ascii.org",
    ];
    for sample in samples {
        let once = normalize_persian_digits(sample);
        assert_eq!(normalize_persian_digits(&once), once, "{}", sample);
    }
}

#[test]
fn test_persian_typed_address_validates() {
    let email = EmailAddress::parse("  ali۱۳۷۰＠gmail.com ");
    assert_eq!(email.normalized(), "ali1370@gmail.com");
    assert!(email.is_valid());
    assert_eq!(email.suggestion(), None);
}
