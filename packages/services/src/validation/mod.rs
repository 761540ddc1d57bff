pub mod field_validators;
pub mod input_validator;
pub mod models;
pub mod password;

// Re-export common types and functions
pub use field_validators::FieldValidator;
pub use input_validator::InputValidator;
pub use password::{password_strength, validate_password, PasswordStrength, PasswordValidationError};
