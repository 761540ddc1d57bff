use models::{AuthResponse, LoginData, SignupData, User};
use uuid::Uuid;

pub fn valid_password() -> &'static str {
    "Abcdef1!"
}

pub fn valid_signup() -> SignupData {
    SignupData {
        first_name: "Al".to_string(),
        last_name: "Ng".to_string(),
        email: "a@b.com".to_string(),
        password: valid_password().to_string(),
        confirm_password: valid_password().to_string(),
        age: "20".to_string(),
        education_level: "graduate".to_string(),
    }
}

pub fn valid_login() -> LoginData {
    LoginData {
        email: "a@b.com".to_string(),
        password: valid_password().to_string(),
        remember_me: false,
    }
}

pub fn auth_response() -> AuthResponse {
    AuthResponse {
        user: User {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            first_name: None,
            last_name: None,
        },
        token: "jwt-token".to_string(),
    }
}
