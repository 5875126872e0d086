use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_basic_address() {
    assert!(is_valid_email("student@chemistry.edu"));
    assert!(is_valid_email("a.b+c@sub.example.org"));
}

#[test]
fn email_rejects_bad_shapes() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("student"));
    assert!(!is_valid_email("student@chemistry"));
    assert!(!is_valid_email("@chemistry.edu"));
    assert!(!is_valid_email("a@b@c.edu"));
    assert!(!is_valid_email("stu dent@chemistry.edu"));
}

#[test]
fn email_rejects_overlong_address() {
    let local = "a".repeat(250);
    assert!(!is_valid_email(&format!("{local}@x.io")));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_accepts_letters_and_digits() {
    assert!(is_valid_password("Password123"));
    assert!(is_valid_password("abcdefg1"));
}

#[test]
fn password_requires_digit() {
    assert!(!is_valid_password("password"));
}

#[test]
fn password_requires_letter() {
    assert!(!is_valid_password("12345678"));
}

#[test]
fn password_requires_eight_characters() {
    assert!(!is_valid_password("abc1234"));
}

// =============================================================
// Name / required / normalization
// =============================================================

#[test]
fn name_needs_two_characters_after_trim() {
    assert!(is_valid_name("Al"));
    assert!(!is_valid_name(" A "));
    assert!(!is_valid_name(""));
}

#[test]
fn filled_ignores_whitespace() {
    assert!(is_filled("x"));
    assert!(!is_filled("   "));
}

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Student@Chemistry.EDU "), "student@chemistry.edu");
}
