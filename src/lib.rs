pub mod forms;

pub use forms::{LoginForm, SignupForm};
