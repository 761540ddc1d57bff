use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use models::{AuthResponse, LoginData, SignupData};

use crate::api::AuthApi;
use crate::errors::GatewayError;

const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
const LOGIN_ENDPOINT: &str = "/api/auth/login";
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
const REFRESH_ENDPOINT: &str = "/api/auth/refresh";

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the auth endpoints. Requests are JSON POSTs; the signup
/// body is the form data as entered, confirm password included.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        tracing::warn!(status = status.as_u16(), path, "auth request rejected");
        Err(GatewayError::from_status(status.as_u16(), body_message))
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status().as_u16();
        response.json().await.map_err(|_| GatewayError::Api {
            status,
            message: "Invalid response body".to_string(),
        })
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn signup(&self, data: &SignupData) -> Result<AuthResponse, GatewayError> {
        let response = self.post(SIGNUP_ENDPOINT, Some(data)).await?;
        Self::decode(response).await
    }

    async fn login(&self, data: &LoginData) -> Result<AuthResponse, GatewayError> {
        let response = self.post(LOGIN_ENDPOINT, Some(data)).await?;
        Self::decode(response).await
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        self.post::<()>(LOGOUT_ENDPOINT, None).await?;
        Ok(())
    }

    async fn refresh(&self) -> Result<AuthResponse, GatewayError> {
        let response = self.post::<()>(REFRESH_ENDPOINT, None).await?;
        Self::decode(response).await
    }
}
