use std::fmt;

/// Characters accepted as "special" by the password rules.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Various types of password validation errors
#[derive(Debug, PartialEq, Eq)]
pub enum PasswordValidationError {
    /// Password is too short
    TooShort,
    /// Password is missing an uppercase letter
    MissingUppercase,
    /// Password is missing a lowercase letter
    MissingLowercase,
    /// Password is missing a number
    MissingNumber,
    /// Password is missing a special character
    MissingSpecialChar,
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordValidationError::TooShort => {
                write!(f, "Password must be at least 8 characters")
            }
            PasswordValidationError::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            PasswordValidationError::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            PasswordValidationError::MissingNumber => {
                write!(f, "Password must contain at least one number")
            }
            PasswordValidationError::MissingSpecialChar => {
                write!(f, "Password must contain at least one special character")
            }
        }
    }
}

/// Validates a password against the signup requirements.
///
/// Rules are checked in declared order and the first failing rule is
/// returned, so callers surface exactly one message per pass.
///
/// # Returns
/// * `Ok(())` if the password is valid
/// * `Err(PasswordValidationError)` for the first failing rule
pub fn validate_password(password: &str) -> Result<(), PasswordValidationError> {
    if password.chars().count() < 8 {
        return Err(PasswordValidationError::TooShort);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordValidationError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordValidationError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordValidationError::MissingNumber);
    }

    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(PasswordValidationError::MissingSpecialChar);
    }

    Ok(())
}

/// Feedback for the password strength meter shown next to the password
/// input. One point per satisfied rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub feedback: &'static str,
}

pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            score: 0,
            feedback: "",
        };
    }

    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ];
    let score = checks.iter().filter(|passed| **passed).count() as u8;

    let feedback = match score {
        0 | 1 => "Very Weak",
        2 => "Weak",
        3 => "Fair",
        4 => "Good",
        _ => "Strong",
    };

    PasswordStrength { score, feedback }
}
