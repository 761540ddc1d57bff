use once_cell::sync::Lazy;
use regex::Regex;

use models::{EducationLevel, FieldErrors};

use super::password::validate_password;

/// RFC-like email shape: local part, @, dotted domain with an alphabetic TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-]+(\.[a-z0-9_'+\-]+)*@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .unwrap()
});

/// Letters, spaces, hyphens, and apostrophes.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());

const AGE_MIN: i64 = 13;
const AGE_MAX: i64 = 100;

/// Per-field rule evaluators. Each method checks its rules in declared order
/// and records only the first failure, so the surfaced message is stable.
pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_name(value: &str, field: &str, errors: &mut FieldErrors) {
        if value.is_empty() {
            errors.add(field, "This field is required");
            return;
        }
        if value.chars().count() < 2 {
            errors.add(field, "Must be at least 2 characters");
            return;
        }
        if value.chars().count() > 50 {
            errors.add(field, "Must be less than 50 characters");
            return;
        }
        if !NAME_RE.is_match(value) {
            errors.add(field, "Only letters, spaces, hyphens, and apostrophes allowed");
        }
    }

    pub fn validate_email(email: &str, errors: &mut FieldErrors) {
        if email.is_empty() {
            errors.add("email", "Email is required");
            return;
        }
        if !EMAIL_RE.is_match(email) {
            errors.add("email", "Please enter a valid email address");
        }
    }

    /// Signup password: full strength rules. An empty value fails the
    /// length rule, which is declared first.
    pub fn validate_new_password(password: &str, errors: &mut FieldErrors) {
        if let Err(password_error) = validate_password(password) {
            errors.add("password", password_error.to_string());
        }
    }

    /// Login password: presence only, no strength rules.
    pub fn validate_login_password(password: &str, errors: &mut FieldErrors) {
        if password.is_empty() {
            errors.add("password", "Password is required");
        }
    }

    pub fn validate_confirm_password(confirm_password: &str, errors: &mut FieldErrors) {
        if confirm_password.is_empty() {
            errors.add("confirmPassword", "Please confirm your password");
        }
    }

    /// Cross-field rule, evaluated after the per-field pass. The failure
    /// attaches to `confirmPassword` unless that field already carries a
    /// per-field error.
    pub fn validate_passwords_match(password: &str, confirm_password: &str, errors: &mut FieldErrors) {
        if password != confirm_password {
            errors.add("confirmPassword", "Passwords don't match");
        }
    }

    pub fn validate_age(age: &str, errors: &mut FieldErrors) {
        if age.is_empty() {
            errors.add("age", "Age is required");
            return;
        }
        match age.trim().parse::<i64>() {
            Ok(n) if (AGE_MIN..=AGE_MAX).contains(&n) => {}
            _ => errors.add("age", "Age must be between 13 and 100"),
        }
    }

    pub fn validate_education_level(level: &str, errors: &mut FieldErrors) {
        if level.is_empty() {
            errors.add("educationLevel", "Please select your education level");
            return;
        }
        if EducationLevel::parse(level).is_none() {
            errors.add("educationLevel", "Please select a valid education level");
        }
    }
}
