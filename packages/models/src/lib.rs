pub mod auth;
pub mod errors;
pub mod forms;

pub use auth::{AuthResponse, User};
pub use errors::{FieldErrors, GENERAL_FIELD};
pub use forms::{EducationLevel, FieldValue, LoginData, SignupData};
