//! Authenticated identity record.

use serde::Serialize;
use serde_json::{Map, Value};

/// Result of a successful authentication.
///
/// Carries at minimum the validated token; the introspection path also
/// fills in the account login when GitHub returns one, and a
/// [`Verify`](crate::Verify) hook may contribute arbitrary extra fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    pub token: String,
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Hook-supplied enrichment fields, flattened on serialization.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_name: None,
            extra: Map::new(),
        }
    }

    pub fn with_user_name(mut self, user_name: Option<String>) -> Self {
        self.user_name = user_name;
        self
    }

    /// Merge hook-supplied fields over the base `{token, userName}` record.
    ///
    /// Hook fields win on key collision, including `token` and `userName`
    /// themselves; a non-string override of either is discarded rather than
    /// corrupting the typed field.
    pub(crate) fn merged(
        token: String,
        user_name: Option<String>,
        fields: Map<String, Value>,
    ) -> Self {
        let mut merged = Map::new();
        merged.insert("token".to_string(), Value::String(token.clone()));
        if let Some(ref login) = user_name {
            merged.insert("userName".to_string(), Value::String(login.clone()));
        }
        for (key, value) in fields {
            merged.insert(key, value);
        }

        let token = merged
            .remove("token")
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or(token);
        let user_name = merged
            .remove("userName")
            .and_then(|v| v.as_str().map(str::to_owned))
            .or(user_name);

        Self {
            token,
            user_name,
            extra: merged,
        }
    }
}
