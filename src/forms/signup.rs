use gateway::AuthApi;
use models::{AuthResponse, FieldErrors, FieldValue, SignupData};
use services::sanitize::sanitize_payload;
use services::submission::{SubmissionController, SubmissionResult, SubmissionState};

/// One signup form instance: its values, its error map, and its submission
/// controller. Forms never share state; dropping the form discards all of it.
pub struct SignupForm<A: AuthApi> {
    values: SignupData,
    errors: FieldErrors,
    controller: SubmissionController,
    api: A,
}

impl<A: AuthApi> SignupForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            values: SignupData::default(),
            errors: FieldErrors::new(),
            controller: SubmissionController::new(),
            api,
        }
    }

    pub fn values(&self) -> &SignupData {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    /// Overwrite one field by its wire name and clear that field's error.
    /// Unknown names and checkbox values are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        let FieldValue::Text(text) = value.into() else {
            tracing::debug!(field = name, "signup form has no checkbox fields");
            return;
        };

        let slot = match name {
            "firstName" => &mut self.values.first_name,
            "lastName" => &mut self.values.last_name,
            "email" => &mut self.values.email,
            "password" => &mut self.values.password,
            "confirmPassword" => &mut self.values.confirm_password,
            "age" => &mut self.values.age,
            "educationLevel" => &mut self.values.education_level,
            _ => {
                tracing::debug!(field = name, "unknown signup field");
                return;
            }
        };
        *slot = text;
        self.errors.clear(name);
    }

    /// Back to the initial defaults.
    pub fn reset(&mut self) {
        self.values = SignupData::default();
        self.errors.clear_all();
        self.controller.reset();
    }

    /// Validate and, if the form is clean, post it to the signup endpoint.
    /// Returns the auth response on success so the caller can redirect or
    /// store the token; on any failure the error map explains why.
    pub async fn submit(&mut self) -> Option<AuthResponse> {
        let result = self
            .controller
            .submit(&self.values, &mut self.errors, || {
                self.api.signup(&self.values)
            })
            .await;

        match result {
            SubmissionResult::Succeeded(response) => {
                let payload = serde_json::to_value(&self.values).unwrap_or_default();
                tracing::info!(payload = %sanitize_payload(payload), "signup successful");
                Some(response)
            }
            _ => None,
        }
    }
}
