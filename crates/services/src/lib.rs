#![forbid(unsafe_code)]

pub mod auth_client;
pub mod auth_service;
pub mod error;
pub mod session_store;

pub use planner_core::Clock;
pub use reqwest::StatusCode;

pub use auth_client::{AuthApi, AuthConfig, AuthGrant, AuthMode, Credentials, HttpAuthApi};
pub use auth_service::AuthService;
pub use error::{AuthConfigError, AuthError, AuthServiceError, SessionStoreError};
pub use session_store::SessionStore;
