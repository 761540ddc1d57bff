use async_trait::async_trait;
use mockall::automock;
use models::{AuthResponse, LoginData, SignupData};

use crate::errors::GatewayError;

/// The auth endpoints consumed by the submission pipeline.
///
/// `refresh` is exposed for completeness; the current controllers never
/// call it.
#[automock]
#[async_trait]
pub trait AuthApi {
    async fn signup(&self, data: &SignupData) -> Result<AuthResponse, GatewayError>;

    async fn login(&self, data: &LoginData) -> Result<AuthResponse, GatewayError>;

    async fn logout(&self) -> Result<(), GatewayError>;

    async fn refresh(&self) -> Result<AuthResponse, GatewayError>;
}
