use std::fmt;

/// Errors produced by the auth HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Transport-level failure, no usable response.
    Network,
    /// The server responded with a non-success status. The message comes
    /// from the response body when it carries one, otherwise it is
    /// synthesized from the status code.
    Api { status: u16, message: String },
}

impl GatewayError {
    pub fn from_status(status: u16, body_message: Option<String>) -> Self {
        let message =
            body_message.unwrap_or_else(|| format!("HTTP error! status: {}", status));
        GatewayError::Api { status, message }
    }

    /// The user-facing message for this error.
    pub fn message(&self) -> &str {
        match self {
            GatewayError::Network => "Network error occurred",
            GatewayError::Api { message, .. } => message.as_str(),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(_: reqwest::Error) -> Self {
        GatewayError::Network
    }
}
