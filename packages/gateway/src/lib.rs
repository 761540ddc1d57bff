pub mod api;
pub mod client;
pub mod errors;

pub use api::{AuthApi, MockAuthApi};
pub use client::AuthClient;
pub use errors::GatewayError;
