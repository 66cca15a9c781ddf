use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use planner_core::model::{AuthToken, UserIdentity};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{AuthConfigError, AuthError};

/// Where the auth endpoints live and how long to wait for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    base_url: Url,
    timeout: Duration,
}

impl AuthConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    /// # Errors
    ///
    /// Returns `AuthConfigError` if `base_url` does not parse or is not http(s).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthConfigError> {
        let mut base_url = Url::parse(base_url.trim())?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AuthConfigError::UnsupportedScheme(
                base_url.scheme().to_string(),
            ));
        }
        // Endpoint paths are joined relative to the base, so keep any prefix.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url, timeout })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// # Errors
    ///
    /// Returns `url::ParseError` if the endpoint cannot be joined to the base.
    pub fn endpoint(&self, mode: AuthMode) -> Result<Url, url::ParseError> {
        self.base_url.join(mode.relative_path())
    }
}

/// Which endpoint a credential submission goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn relative_path(self) -> &'static str {
        match self {
            AuthMode::Login => "api/auth/login",
            AuthMode::Signup => "api/auth/signup",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Part of the email after `@`, for log fields.
    #[must_use]
    pub fn email_domain(&self) -> &str {
        self.email.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login/signup payload.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthGrant {
    pub identity: UserIdentity,
    pub token: AuthToken,
}

/// The remote authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an identity and token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` for non-2xx responses, and other
    /// `AuthError` variants for transport or decoding faults.
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthGrant, AuthError>;
}

#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    config: AuthConfig,
}

impl HttpAuthApi {
    /// # Errors
    ///
    /// Returns `AuthError::Http` if the HTTP client cannot be built.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthGrant, AuthError> {
        let url = self.config.endpoint(mode)?;
        tracing::debug!(mode = mode.as_str(), %url, "sending auth request");

        let response = self.client.post(url).json(credentials).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let payload: Value = serde_json::from_slice(&body).map_err(AuthError::Decode)?;
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Err(AuthError::Rejected { status, message });
        }

        let payload: GrantBody = serde_json::from_slice(&body).map_err(AuthError::Decode)?;
        Ok(AuthGrant {
            identity: UserIdentity::from_value(payload.user)?,
            token: AuthToken::new(payload.token),
        })
    }
}

#[derive(Debug, Deserialize)]
struct GrantBody {
    user: Value,
    token: String,
}
