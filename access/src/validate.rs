//! Field validators shared by the sign-in forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use fancy_regex::Regex;

/// Longest accepted email address (RFC 5321 path limit).
pub const EMAIL_MAX_LEN: usize = 254;

/// Shortest accepted password.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Shortest accepted display name, after trimming.
pub const NAME_MIN_LEN: usize = 2;

static EMAIL_RE: LazyLock<Result<Regex, fancy_regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

// At least one ASCII letter and one ASCII digit, eight characters or more.
static PASSWORD_RE: LazyLock<Result<Regex, fancy_regex::Error>> =
    LazyLock::new(|| Regex::new(r"^(?=.*[A-Za-z])(?=.*[0-9]).{8,}$"));

fn matches(re: &Result<Regex, fancy_regex::Error>, text: &str) -> bool {
    let re = match re {
        Ok(re) => re,
        Err(e) => {
            log::error!("validator pattern failed to compile: {e}");
            return false;
        }
    };
    re.is_match(text).unwrap_or_else(|e| {
        log::warn!("validator gave up on input: {e}");
        false
    })
}

/// Whether `email` looks like `local@domain.tld` and fits the length limit.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LEN && matches(&EMAIL_RE, email)
}

/// Whether `password` has at least eight characters including a letter and a digit.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    matches(&PASSWORD_RE, password)
}

/// Whether a display name has at least two characters after trimming.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= NAME_MIN_LEN
}

/// Whether a required field has any non-whitespace content.
#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Canonical form used to compare and store emails.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
