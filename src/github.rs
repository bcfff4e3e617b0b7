//! Outbound HTTP surface for GitHub's token APIs.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::Result;

const BASE_URL: &str = "https://api.github.com";

/// Thin wrapper over a shared `reqwest::Client` pinned to one API root.
///
/// Performs the raw round trips; status interpretation stays with the
/// strategy.
#[derive(Debug, Clone)]
pub(crate) struct GithubApi {
    http: reqwest::Client,
    base_url: String,
}

impl GithubApi {
    pub(crate) fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Self::base_url_from_env(),
        }
    }

    fn base_url_from_env() -> String {
        std::env::var("GITHUB_API_BASE_URL").unwrap_or_else(|_| BASE_URL.into())
    }

    pub(crate) fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// `GET /applications/{client_id}/tokens/{token}`, Basic auth as the
    /// application.
    pub(crate) async fn check_token(
        &self,
        client_id: &str,
        client_secret: &str,
        token: &str,
    ) -> Result<reqwest::Response> {
        let url = format!(
            "{}/applications/{}/tokens/{}",
            self.base_url, client_id, token
        );
        let response = self
            .http
            .get(&url)
            .basic_auth(client_id, Some(client_secret))
            .send()
            .await?;
        Ok(response)
    }

    /// `PUT /authorizations/clients/{client_id}`, Basic auth as the
    /// end-user.
    pub(crate) async fn create_client_token(
        &self,
        client_id: &str,
        user_name: &str,
        password: &str,
        payload: &Map<String, Value>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/authorizations/clients/{}", self.base_url, client_id);
        let response = self
            .http
            .put(&url)
            .basic_auth(user_name, Some(password))
            .json(payload)
            .send()
            .await?;
        Ok(response)
    }
}

/// Introspection response body. GitHub omits `user` for tokens not tied to
/// an account, and some deployments return an empty body entirely.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TokenInfo {
    #[serde(default)]
    pub(crate) user: Option<Account>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Account {
    pub(crate) login: String,
}

/// Exchange response body.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedAuthorization {
    pub(crate) token: String,
}
