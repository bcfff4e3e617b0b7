//! Strategy configuration.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

/// Normalized client credentials for the GitHub application.
///
/// Constructed once and immutable thereafter; every authenticate call reads
/// the same instance for the lifetime of the strategy.
#[derive(Clone)]
pub struct StrategyConfig {
    client_id: String,
    client_secret: SecretString,
}

/// Loosely-typed options object accepted by [`StrategyConfig::from_value`].
///
/// The client identifier is accepted under both its current and legacy
/// spellings; `clientId` wins when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    client_id: Option<String>,
    #[serde(rename = "clientID")]
    client_id_legacy: Option<String>,
    client_secret: Option<String>,
}

impl StrategyConfig {
    /// Create from already-normalized credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Create from a JSON options object, e.g. deserialized host config.
    ///
    /// Fails with [`Error::Config`] when either credential is absent or
    /// empty after normalization.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawConfig = serde_json::from_value(value)?;

        let client_id = raw
            .client_id
            .filter(|id| !id.is_empty())
            .or(raw.client_id_legacy.filter(|id| !id.is_empty()))
            .ok_or(Error::Config("clientId"))?;
        let client_secret = raw
            .client_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(Error::Config("clientSecret"))?;

        Ok(Self::new(client_id, client_secret))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

impl fmt::Debug for StrategyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}
