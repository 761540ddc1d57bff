pub mod login_validator;
pub mod signup_validator;
