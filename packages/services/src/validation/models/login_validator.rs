use models::{FieldErrors, LoginData};

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::InputValidator;

impl InputValidator for LoginData {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        FieldValidator::validate_email(&self.email, &mut errors);
        FieldValidator::validate_login_password(&self.password, &mut errors);
        // remember_me carries no rules

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::valid_login;

    #[test]
    fn test_valid_login_passes() {
        assert!(valid_login().validate().is_ok());
        assert!(valid_login().is_valid());
    }

    #[test]
    fn test_login_password_only_requires_presence() {
        // No strength rules on login, any non-empty password is accepted
        let data = LoginData {
            email: "a@b.com".to_string(),
            password: "weak".to_string(),
            remember_me: false,
        };
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_empty_login_reports_both_fields() {
        let errors = LoginData::default().validate().unwrap_err();

        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_remember_me_is_never_validated() {
        let mut data = valid_login();
        data.remember_me = true;
        assert!(data.validate().is_ok());
    }
}
