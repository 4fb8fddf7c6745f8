//! Field-level checks shared by every form. Each returns the message to show,
//! or `None` when the value passes.

use chrono::NaiveDate;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const INVALID_URL: &str = "Invalid URL";

/// Non-empty after trimming.
pub fn required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(message.to_string());
    }
    None
}

/// Length bounds count the value as typed, surrounding whitespace included.
pub fn min_chars(value: &str, min: usize, message: &str) -> Option<String> {
    if value.chars().count() < min {
        return Some(message.to_string());
    }
    None
}

pub fn max_chars(value: &str, max: usize, message: &str) -> Option<String> {
    if value.chars().count() > max {
        return Some(message.to_string());
    }
    None
}

pub fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.len() > 254 || trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

pub fn email(value: &str) -> Option<String> {
    if is_valid_email(value) {
        None
    } else {
        Some(INVALID_EMAIL.to_string())
    }
}

/// `scheme://host...` with an alphabetic scheme and a non-empty host.
pub fn is_valid_url(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((scheme, rest)) = trimmed.split_once("://") else {
        return false;
    };
    let scheme_ok = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("")
        .rsplit('@')
        .next()
        .unwrap_or("");
    scheme_ok && !host.is_empty() && !host.starts_with(':')
}

pub fn url(value: &str) -> Option<String> {
    if is_valid_url(value) {
        None
    } else {
        Some(INVALID_URL.to_string())
    }
}

/// Parse a `YYYY-MM-DD` date from an HTML date input.
pub fn date(value: &str, missing: &str, invalid: &str) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing.to_string());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid.to_string())
}

/// At least one lowercase letter, one uppercase letter and one digit.
pub fn password_complexity(value: &str, message: &str) -> Option<String> {
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if has_lower && has_upper && has_digit {
        None
    } else {
        Some(message.to_string())
    }
}
