//! The authentication decision procedure.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::github::{CreatedAuthorization, GithubApi, TokenInfo};
use crate::{
    AuthenticateOptions, Error, Identity, Request, Result, StrategyConfig, Verification, Verify,
};

/// Strategy name reported to host frameworks.
pub const STRATEGY_NAME: &str = "stateless-github";

/// Capability interface consumed by a pluggable host framework.
///
/// `Ok` is the SUCCESS outcome and `Err` the FAILURE outcome; there is no
/// partial success, and the strategy never retries on its own. Retry
/// policy, if any, belongs to the caller.
#[async_trait]
pub trait AuthenticationStrategy: Send + Sync {
    /// Strategy name for registration and logging.
    fn name(&self) -> &str;

    /// Decide whether `request` represents a valid identity.
    async fn authenticate(
        &self,
        request: &Request,
        options: &AuthenticateOptions,
    ) -> Result<Identity>;
}

/// Stateless GitHub authentication strategy.
///
/// Holds only the immutable [`StrategyConfig`], a shared HTTP client, and
/// the optional [`Verify`] hook; concurrent authenticate calls never
/// interfere. Each call performs at most one outbound request:
///
/// - introspection (the default): the bearer token from the request is
///   checked against `GET /applications/{client_id}/tokens/{token}`
/// - exchange (`require_access_token`): a username/password pair is traded
///   for a new token via `PUT /authorizations/clients/{client_id}`
pub struct StatelessGithubStrategy {
    config: StrategyConfig,
    api: GithubApi,
    verify: Option<Arc<dyn Verify>>,
}

impl fmt::Debug for StatelessGithubStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatelessGithubStrategy")
            .field("config", &self.config)
            .field("verify", &self.verify.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

impl StatelessGithubStrategy {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            api: GithubApi::new(),
            verify: None,
        }
    }

    /// Create with a post-validation verification hook.
    pub fn with_verify(config: StrategyConfig, verify: Arc<dyn Verify>) -> Self {
        Self {
            config,
            api: GithubApi::new(),
            verify: Some(verify),
        }
    }

    /// Point the strategy at a different API root (GitHub Enterprise,
    /// tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api = self.api.with_base_url(url);
        self
    }

    /// Authenticate `request`, resolving to the identity on success.
    ///
    /// Exactly one of the two paths executes per call, selected by
    /// [`AuthenticateOptions::require_access_token`].
    pub async fn authenticate(
        &self,
        request: &Request,
        options: &AuthenticateOptions,
    ) -> Result<Identity> {
        if options.require_access_token {
            self.exchange(request, options).await
        } else {
            self.introspect(request, options).await
        }
    }

    /// Username/password exchange for a freshly issued application token.
    async fn exchange(
        &self,
        request: &Request,
        options: &AuthenticateOptions,
    ) -> Result<Identity> {
        let user_name = request
            .body_str(options.user_name_field())
            .map(str::to_owned)
            .or_else(|| options.user_name.clone());
        let password = request
            .body_str(options.password_field())
            .map(str::to_owned)
            .or_else(|| options.password.clone());

        let payload = self.exchange_payload(options);
        let response = self
            .api
            .create_client_token(
                self.config.client_id(),
                user_name.as_deref().unwrap_or(""),
                password.as_deref().unwrap_or(""),
                &payload,
            )
            .await?;

        let status = response.status().as_u16();
        match status {
            422 => Err(Error::ProviderConfiguration),
            200 | 201 => {
                let created: CreatedAuthorization =
                    serde_json::from_slice(&response.bytes().await?)?;
                tracing::debug!(user_name = ?user_name, "issued application token");
                Ok(Identity::new(created.token).with_user_name(user_name))
            }
            status => Err(Error::Provider { status }),
        }
    }

    /// Bearer-token introspection against the application token endpoint.
    async fn introspect(
        &self,
        request: &Request,
        options: &AuthenticateOptions,
    ) -> Result<Identity> {
        let token = Self::resolve_token(request, options)?;

        let response = self
            .api
            .check_token(
                self.config.client_id(),
                self.config.client_secret(),
                &token,
            )
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            tracing::debug!(status, "token rejected");
            return Err(Error::Provider { status });
        }

        // GitHub may answer with an empty body; treat anything unparseable
        // as carrying no account information.
        let info: TokenInfo =
            serde_json::from_slice(&response.bytes().await?).unwrap_or_default();
        let user_name = info.user.map(|account| account.login);

        match &self.verify {
            None => Ok(Identity::new(token).with_user_name(user_name)),
            Some(hook) => match hook.verify(user_name.as_deref(), &token).await? {
                Verification::Denied => Err(Error::VerificationDenied),
                Verification::Approved => Ok(Identity::new(token).with_user_name(user_name)),
                Verification::Enriched(fields) => Ok(Identity::merged(token, user_name, fields)),
            },
        }
    }

    /// Token lookup: authorization header first, query parameter fallback.
    ///
    /// No header and no query token fails before any network call; a header
    /// whose token segment is empty likewise fails locally.
    fn resolve_token(request: &Request, options: &AuthenticateOptions) -> Result<String> {
        let token = match request.bearer_token() {
            Some(token) => token,
            None => request
                .query_param(options.access_token_field())
                .ok_or(Error::MissingAuthorization)?,
        };
        if token.is_empty() {
            return Err(Error::MissingCredentials);
        }
        Ok(token.to_owned())
    }

    /// Exchange payload: the configured secret goes in first, then any
    /// caller-supplied extra fields. A colliding extra field shadows the
    /// secret; long-standing wire behavior, kept as-is.
    fn exchange_payload(&self, options: &AuthenticateOptions) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert(
            "client_secret".to_string(),
            Value::String(self.config.client_secret().to_owned()),
        );
        for (key, value) in &options.extra {
            payload.insert(key.clone(), value.clone());
        }
        payload
    }
}

#[async_trait]
impl AuthenticationStrategy for StatelessGithubStrategy {
    fn name(&self) -> &str {
        STRATEGY_NAME
    }

    async fn authenticate(
        &self,
        request: &Request,
        options: &AuthenticateOptions,
    ) -> Result<Identity> {
        StatelessGithubStrategy::authenticate(self, request, options).await
    }
}
