//! Post-validation verification hook.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::Result;

/// Verdict returned by a [`Verify`] hook.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// Accept the identity as-is.
    Approved,
    /// Accept and merge the supplied fields into the identity record.
    /// Hook fields win on key collision.
    Enriched(Map<String, Value>),
    /// Reject an otherwise-valid token.
    Denied,
}

impl Verification {
    /// Enrichment verdict from key/value pairs.
    pub fn enriched<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Enriched(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Caller-supplied extension point invoked after GitHub accepts a token.
///
/// The hook sees the account login extracted from the introspection
/// response (when GitHub returned one) and the raw token. It runs only on
/// a 200 provider response, never on rejected tokens.
///
/// Returning `Err` fails the authentication with that error;
/// [`Verification::Denied`] fails it with
/// [`Error::VerificationDenied`](crate::Error::VerificationDenied). Hooks
/// can build their own failures with
/// [`Error::verification`](crate::Error::verification).
#[async_trait]
pub trait Verify: Send + Sync {
    async fn verify(&self, user_name: Option<&str>, token: &str) -> Result<Verification>;
}
