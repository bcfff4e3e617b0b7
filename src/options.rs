//! Per-call invocation options.

use serde_json::{Map, Value};

/// Default body field read for the username on the exchange path.
pub const DEFAULT_USER_NAME_FIELD: &str = "userName";

/// Default body field read for the password on the exchange path.
pub const DEFAULT_PASSWORD_FIELD: &str = "password";

/// Default query parameter read as the token fallback on the introspection
/// path.
pub const DEFAULT_ACCESS_TOKEN_FIELD: &str = "access_token";

/// Options scoped to a single authenticate call.
///
/// `require_access_token` selects the path: `true` exchanges a
/// username/password for a new application token, `false` (the default)
/// introspects a bearer token from the request. Exactly one path runs per
/// call.
#[derive(Debug, Clone, Default)]
pub struct AuthenticateOptions {
    pub require_access_token: bool,
    /// Explicit username, used when the request body carries none.
    pub user_name: Option<String>,
    /// Explicit password, used when the request body carries none.
    pub password: Option<String>,
    /// Body field to read the username from. Defaults to `userName`.
    pub user_name_field: Option<String>,
    /// Body field to read the password from. Defaults to `password`.
    pub password_field: Option<String>,
    /// Query parameter to read a token from when no authorization header is
    /// present. Defaults to `access_token`.
    pub access_token_field: Option<String>,
    /// Extra fields merged into the exchange payload (e.g. scope lists).
    pub extra: Map<String, Value>,
}

impl AuthenticateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the exchange path.
    pub fn exchange() -> Self {
        Self {
            require_access_token: true,
            ..Self::default()
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_user_name_field(mut self, field: impl Into<String>) -> Self {
        self.user_name_field = Some(field.into());
        self
    }

    pub fn with_password_field(mut self, field: impl Into<String>) -> Self {
        self.password_field = Some(field.into());
        self
    }

    pub fn with_access_token_field(mut self, field: impl Into<String>) -> Self {
        self.access_token_field = Some(field.into());
        self
    }

    pub fn with_extra_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub(crate) fn user_name_field(&self) -> &str {
        self.user_name_field.as_deref().unwrap_or(DEFAULT_USER_NAME_FIELD)
    }

    pub(crate) fn password_field(&self) -> &str {
        self.password_field.as_deref().unwrap_or(DEFAULT_PASSWORD_FIELD)
    }

    pub(crate) fn access_token_field(&self) -> &str {
        self.access_token_field
            .as_deref()
            .unwrap_or(DEFAULT_ACCESS_TOKEN_FIELD)
    }
}
