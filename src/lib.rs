//! # stateless-github
//!
//! Stateless authentication strategy for GitHub tokens.
//!
//! Validates a caller's identity against GitHub's token APIs without keeping
//! any server-side session state. Two independent paths are supported:
//!
//! - **Introspection**: verify a pre-issued bearer token against
//!   `GET /applications/{client_id}/tokens/{token}`
//! - **Exchange**: trade a username/password for a freshly issued
//!   application token via `PUT /authorizations/clients/{client_id}`
//!
//! An optional [`Verify`] hook can enrich or reject the resulting identity
//! after GitHub has accepted the token.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stateless_github::{
//!     AuthenticateOptions, Request, StatelessGithubStrategy, StrategyConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stateless_github::Error> {
//!     let strategy =
//!         StatelessGithubStrategy::new(StrategyConfig::new("my-client-id", "my-client-secret"));
//!
//!     let request = Request::new().with_header("authorization", "Bearer some-token");
//!     let identity = strategy
//!         .authenticate(&request, &AuthenticateOptions::default())
//!         .await?;
//!     println!("authenticated: {}", identity.token);
//!     Ok(())
//! }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
mod github;
pub mod identity;
pub mod options;
pub mod request;
pub mod strategy;
pub mod verify;

// Re-exports for convenience
pub use config::StrategyConfig;
pub use identity::Identity;
pub use options::AuthenticateOptions;
pub use request::Request;
pub use strategy::{AuthenticationStrategy, STRATEGY_NAME, StatelessGithubStrategy};
pub use verify::{Verification, Verify};

/// Error type for authentication outcomes.
///
/// Every failure surfaces exactly once through the `Err` arm of
/// [`Result`]; nothing is retried or swallowed internally.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Required configuration is missing at construction time.
    #[error("Missing required option '{0}'")]
    Config(&'static str),

    /// Neither an authorization header nor a query token was supplied.
    #[error("No authorization header or query token present")]
    MissingAuthorization,

    /// An authorization header was supplied but carries no token.
    #[error("Authorization header carries no token")]
    MissingCredentials,

    /// Network-level failure contacting GitHub.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub signalled that the application registration itself is broken.
    #[error("GitHub seems to be configured with a bad client configuration.")]
    ProviderConfiguration,

    /// GitHub returned a non-success status not otherwise special-cased.
    #[error("GitHub rejected the request (HTTP {status})")]
    Provider { status: u16 },

    /// The verification hook reported an error.
    #[error("Verification failed: {0}")]
    Verification(String),

    /// The verification hook rejected an otherwise-valid token.
    #[error("Verification hook rejected the identity")]
    VerificationDenied,

    /// A success response carried a malformed body.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error category for unified handling by host frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or rejected credentials (400, 401, 403)
    Authorization,
    /// Local or provider-side configuration errors
    Configuration,
    /// Network or provider errors that may succeed on retry
    Transient,
    /// Unexpected responses and parse failures
    Internal,
}

impl Error {
    /// Build a [`Error::Verification`] from a hook's failure message.
    pub fn verification(message: impl Into<String>) -> Self {
        Error::Verification(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MissingAuthorization
            | Error::MissingCredentials
            | Error::Verification(_)
            | Error::VerificationDenied => ErrorCategory::Authorization,
            Error::Provider {
                status: 401 | 403, ..
            } => ErrorCategory::Authorization,

            Error::Config(_) | Error::ProviderConfiguration => ErrorCategory::Configuration,

            Error::Network(_) => ErrorCategory::Transient,
            Error::Provider {
                status: 500..=599, ..
            } => ErrorCategory::Transient,

            Error::Provider { .. } | Error::Json(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_authorization_error(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Transient
    }

    /// HTTP status equivalent of this failure, when one exists.
    ///
    /// Locally detected failures map to their conventional codes; provider
    /// rejections carry the raw status GitHub returned.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::MissingAuthorization => Some(401),
            Error::MissingCredentials => Some(400),
            Error::VerificationDenied => Some(403),
            Error::ProviderConfiguration => Some(422),
            Error::Provider { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
