use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::SessionError;

/// The user record returned by the auth endpoint.
///
/// Kept as an opaque JSON object; only `email` is interpreted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(Map<String, Value>);

impl UserIdentity {
    #[must_use]
    pub fn from_email(email: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("email".to_string(), Value::String(email.into()));
        Self(map)
    }

    /// # Errors
    ///
    /// Returns `SessionError::IdentityNotObject` unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Result<Self, SessionError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(SessionError::IdentityNotObject),
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError` if `raw` is not JSON or not an object.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// Name to greet the user with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.email().filter(|email| !email.is_empty()).unwrap_or("Student")
    }

    /// Single uppercase letter for the avatar bubble.
    #[must_use]
    pub fn initial(&self) -> String {
        self.email()
            .and_then(|email| email.chars().next())
            .map_or_else(|| "U".to_string(), |ch| ch.to_uppercase().collect())
    }
}

/// Bearer token issued by the auth endpoint. Never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// An authenticated identity/token pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    identity: UserIdentity,
    token: AuthToken,
    established_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn new(identity: UserIdentity, token: AuthToken, established_at: DateTime<Utc>) -> Self {
        Self {
            identity,
            token,
            established_at,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    #[must_use]
    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    #[must_use]
    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Unresolved,
    Authenticated,
    Anonymous,
}

/// Resolution state of the current session.
///
/// `Unresolved` only exists between process start and the first restore.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Unresolved,
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self {
            SessionState::Unresolved => SessionStatus::Unresolved,
            SessionState::Anonymous => SessionStatus::Anonymous,
            SessionState::Authenticated(_) => SessionStatus::Authenticated,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}
