use std::cell::Cell;
use std::future::Future;

use gateway::GatewayError;
use models::{AuthResponse, FieldErrors};

use crate::validation::input_validator::InputValidator;

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Outcome of a submit trigger. Error details land in the `FieldErrors` map
/// handed to `submit`, which is replaced wholesale on each pass.
#[derive(Debug, PartialEq)]
pub enum SubmissionResult {
    /// A submission was already in flight; nothing was validated or sent.
    Ignored,
    /// Validation failed; no network call was made.
    Invalid,
    Succeeded(AuthResponse),
    Failed,
}

/// Map a gateway error onto the form's error map. A message that mentions a
/// known field lands on that field, anything else on the general key.
pub fn route_gateway_error(error: &GatewayError) -> FieldErrors {
    let message = error.message();
    let mut errors = FieldErrors::new();
    if message.to_lowercase().contains("email") {
        errors.set("email", message);
    } else {
        errors.set_general(message);
    }
    errors
}

/// Drives validate -> gateway call -> error mapping for one form instance.
///
/// State lives in a `Cell` so a re-entrant submit during an await can be
/// rejected without queueing. Each form owns its own controller; nothing is
/// shared across instances.
pub struct SubmissionController {
    state: Cell<SubmissionState>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self {
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    /// Back to Idle, used when the owning form resets.
    pub fn reset(&self) {
        self.state.set(SubmissionState::Idle);
    }

    fn can_start(&self) -> bool {
        matches!(
            self.state.get(),
            SubmissionState::Idle | SubmissionState::Failed
        )
    }

    /// Run one submission attempt. `call` is invoked at most once, and only
    /// after validation passes.
    pub async fn submit<T, Fut>(
        &self,
        form: &T,
        errors: &mut FieldErrors,
        call: impl FnOnce() -> Fut,
    ) -> SubmissionResult
    where
        T: InputValidator,
        Fut: Future<Output = Result<AuthResponse, GatewayError>>,
    {
        if !self.can_start() {
            tracing::debug!(state = ?self.state.get(), "submit ignored, attempt already in flight");
            return SubmissionResult::Ignored;
        }

        self.state.set(SubmissionState::Validating);
        if let Err(validation_errors) = form.validate() {
            *errors = validation_errors;
            self.state.set(SubmissionState::Idle);
            tracing::debug!(errors = %errors, "validation failed");
            return SubmissionResult::Invalid;
        }

        // A passing pass empties the map before the call goes out
        errors.clear_all();
        self.state.set(SubmissionState::Submitting);

        match call().await {
            Ok(response) => {
                self.state.set(SubmissionState::Succeeded);
                tracing::info!("submission succeeded");
                SubmissionResult::Succeeded(response)
            }
            Err(error) => {
                self.state.set(SubmissionState::Failed);
                tracing::warn!(error = %error, "submission failed");
                *errors = route_gateway_error(&error);
                SubmissionResult::Failed
            }
        }
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{auth_response, valid_login};
    use models::LoginData;

    #[tokio::test]
    async fn test_valid_form_reaches_succeeded() {
        let controller = SubmissionController::new();
        let mut errors = FieldErrors::new();

        let result = controller
            .submit(&valid_login(), &mut errors, || async { Ok(auth_response()) })
            .await;

        assert!(matches!(result, SubmissionResult::Succeeded(_)));
        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_form_returns_to_idle_without_calling_gateway() {
        let controller = SubmissionController::new();
        let mut errors = FieldErrors::new();
        let calls = Cell::new(0u32);

        let result = controller
            .submit(&LoginData::default(), &mut errors, || {
                calls.set(calls.get() + 1);
                async { Ok(auth_response()) }
            })
            .await;

        assert_eq!(result, SubmissionResult::Invalid);
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_passing_validation_empties_stale_errors_before_the_call() {
        let controller = SubmissionController::new();
        let mut errors = FieldErrors::new();
        errors.set_general("Network error occurred");

        controller
            .submit(&valid_login(), &mut errors, || async { Ok(auth_response()) })
            .await;

        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_double_submit_while_pending_issues_one_call() {
        let controller = SubmissionController::new();
        let form = valid_login();
        let mut first_errors = FieldErrors::new();
        let mut second_errors = FieldErrors::new();
        let calls = Cell::new(0u32);

        let first = controller.submit(&form, &mut first_errors, || {
            calls.set(calls.get() + 1);
            async {
                // Hold the first attempt in Submitting across a poll
                tokio::task::yield_now().await;
                Ok(auth_response())
            }
        });
        let second = controller.submit(&form, &mut second_errors, || {
            calls.set(calls.get() + 1);
            async { Ok(auth_response()) }
        });

        let (first, second) = futures::join!(first, second);

        assert!(matches!(first, SubmissionResult::Succeeded(_)));
        assert_eq!(second, SubmissionResult::Ignored);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_submit_after_success_is_ignored() {
        let controller = SubmissionController::new();
        let mut errors = FieldErrors::new();
        controller
            .submit(&valid_login(), &mut errors, || async { Ok(auth_response()) })
            .await;

        let result = controller
            .submit(&valid_login(), &mut errors, || async { Ok(auth_response()) })
            .await;

        assert_eq!(result, SubmissionResult::Ignored);
    }

    #[tokio::test]
    async fn test_retry_after_failure_is_permitted() {
        let controller = SubmissionController::new();
        let mut errors = FieldErrors::new();

        controller
            .submit(&valid_login(), &mut errors, || async {
                Err(GatewayError::Network)
            })
            .await;
        assert_eq!(controller.state(), SubmissionState::Failed);
        assert_eq!(errors.general(), Some("Network error occurred"));

        let result = controller
            .submit(&valid_login(), &mut errors, || async { Ok(auth_response()) })
            .await;

        assert!(matches!(result, SubmissionResult::Succeeded(_)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_mention_routes_to_the_email_field() {
        let error = GatewayError::Api {
            status: 409,
            message: "An account with this email already exists".to_string(),
        };

        let errors = route_gateway_error(&error);
        assert_eq!(
            errors.get("email"),
            Some("An account with this email already exists")
        );
        assert!(errors.general().is_none());
    }

    #[test]
    fn test_other_api_errors_route_to_general() {
        let error = GatewayError::Api {
            status: 500,
            message: "HTTP error! status: 500".to_string(),
        };

        let errors = route_gateway_error(&error);
        assert_eq!(errors.general(), Some("HTTP error! status: 500"));
    }
}
