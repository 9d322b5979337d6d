//! Persian user-facing texts for validity badges and field errors.

pub const BADGE_VALID_EMAIL: &str = "✓ معتبر";
pub const BADGE_INVALID: &str = "✗ نامعتبر";

pub const PHONE_INVALID: &str = "لطفاً یک شماره تلفن معتبر وارد کنید";

pub const EMAIL_EMPTY: &str = "لطفاً آدرس ایمیل خود را وارد کنید";
pub const EMAIL_MISSING_AT: &str = "آدرس ایمیل باید شامل @ باشد";
pub const EMAIL_MISSING_DOMAIN: &str = "آدرس ایمیل باید شامل نام دامنه باشد (مثلاً gmail.com)";
pub const EMAIL_INVALID: &str = "لطفاً یک آدرس ایمیل معتبر وارد کنید";

pub const USERNAME_EMPTY: &str = "لطفاً نام کاربری را وارد کنید";
pub const USERNAME_CHARSET: &str = "نام کاربری فقط باید شامل حروف انگلیسی و اعداد باشد";
pub const PASSWORD_TOO_SHORT: &str = "رمز عبور باید حداقل 6 کاراکتر باشد";

/// Minimum password length accepted by the user form.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Message for an email control that failed validation, picked by what is missing.
///
/// Returns `None` for a syntactically valid address.
pub fn email_validity_message(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        Some(EMAIL_EMPTY)
    } else if !email.contains('@') {
        Some(EMAIL_MISSING_AT)
    } else if !email.contains('.') {
        Some(EMAIL_MISSING_DOMAIN)
    } else if !crate::domain::is_valid_syntax(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

/// Message for the user form's username control. Usernames are ASCII letters and digits.
pub fn username_validity_message(username: &str) -> Option<&'static str> {
    if username.trim().is_empty() {
        Some(USERNAME_EMPTY)
    } else if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(USERNAME_CHARSET)
    } else {
        None
    }
}

pub fn password_validity_message(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_messages() {
        assert_eq!(email_validity_message("  "), Some(EMAIL_EMPTY));
        assert_eq!(email_validity_message("ali.gmail.com"), Some(EMAIL_MISSING_AT));
        assert_eq!(email_validity_message("ali@gmail"), Some(EMAIL_MISSING_DOMAIN));
        assert_eq!(email_validity_message("ali@@gmail.com"), Some(EMAIL_INVALID));
        assert_eq!(email_validity_message("ali@gmail.com"), None);
    }

    #[test]
    fn test_username_messages() {
        assert_eq!(username_validity_message(""), Some(USERNAME_EMPTY));
        assert_eq!(username_validity_message("علی"), Some(USERNAME_CHARSET));
        assert_eq!(username_validity_message("ali_1"), Some(USERNAME_CHARSET));
        assert_eq!(username_validity_message("ali1"), None);
    }

    #[test]
    fn test_password_messages() {
        assert_eq!(password_validity_message("12345"), Some(PASSWORD_TOO_SHORT));
        assert_eq!(password_validity_message("123456"), None);
    }
}
