use models::{FieldErrors, SignupData};

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::InputValidator;

impl InputValidator for SignupData {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        FieldValidator::validate_name(&self.first_name, "firstName", &mut errors);
        FieldValidator::validate_name(&self.last_name, "lastName", &mut errors);
        FieldValidator::validate_email(&self.email, &mut errors);
        FieldValidator::validate_new_password(&self.password, &mut errors);
        FieldValidator::validate_confirm_password(&self.confirm_password, &mut errors);
        FieldValidator::validate_age(&self.age, &mut errors);
        FieldValidator::validate_education_level(&self.education_level, &mut errors);

        // Cross-field rule runs after the per-field pass
        FieldValidator::validate_passwords_match(
            &self.password,
            &self.confirm_password,
            &mut errors,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
