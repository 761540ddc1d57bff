use gateway::AuthApi;
use models::{AuthResponse, FieldErrors, FieldValue, LoginData};
use services::sanitize::sanitize_payload;
use services::submission::{SubmissionController, SubmissionResult, SubmissionState};

/// One login form instance. Same shape as the signup form, with the
/// remember-me checkbox as the only non-text field.
pub struct LoginForm<A: AuthApi> {
    values: LoginData,
    errors: FieldErrors,
    controller: SubmissionController,
    api: A,
}

impl<A: AuthApi> LoginForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            values: LoginData::default(),
            errors: FieldErrors::new(),
            controller: SubmissionController::new(),
            api,
        }
    }

    pub fn values(&self) -> &LoginData {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    /// Overwrite one field by its wire name and clear that field's error.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        match (name, value.into()) {
            ("email", FieldValue::Text(text)) => self.values.email = text,
            ("password", FieldValue::Text(text)) => self.values.password = text,
            ("rememberMe", FieldValue::Flag(checked)) => self.values.remember_me = checked,
            (field, _) => {
                tracing::debug!(field, "ignored login field update");
                return;
            }
        }
        self.errors.clear(name);
    }

    pub fn reset(&mut self) {
        self.values = LoginData::default();
        self.errors.clear_all();
        self.controller.reset();
    }

    /// Validate and, if the form is clean, post it to the login endpoint.
    pub async fn submit(&mut self) -> Option<AuthResponse> {
        let result = self
            .controller
            .submit(&self.values, &mut self.errors, || {
                self.api.login(&self.values)
            })
            .await;

        match result {
            SubmissionResult::Succeeded(response) => {
                let payload = serde_json::to_value(&self.values).unwrap_or_default();
                tracing::info!(payload = %sanitize_payload(payload), "login successful");
                Some(response)
            }
            _ => None,
        }
    }
}
