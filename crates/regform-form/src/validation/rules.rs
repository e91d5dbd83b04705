//! Format checks for the patterns a field definition can declare.

use regex::Regex;
use std::sync::LazyLock;

use crate::field::Pattern;

/// `local@domain.tld`: non-blank local part, dot-separated domain labels,
/// alphabetic top-level label of two or more letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("validation: static email pattern must compile")
});

pub(super) fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub(super) fn is_exact_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the failure message when `value` does not match `pattern`.
pub(super) fn check(pattern: Pattern, label: &str, value: &str) -> Option<String> {
    match pattern {
        Pattern::Email if !is_email(value) => Some("Invalid email format".to_string()),
        Pattern::ExactDigits(n) if !is_exact_digits(value, n) => {
            Some(format!("{label} must be exactly {n} digits"))
        }
        _ => None,
    }
}
