mod login;
mod signup;

pub use login::LoginForm;
pub use signup::SignupForm;
