//! Droidforge GitHub Client
//!
//! A typed async client for the slice of the GitHub REST API the build
//! relay consumes: repository contents (publish the source archive),
//! workflow dispatch (trigger the build), run listing (poll for
//! completion) and artifacts (fetch the result bundle).
//!
//! # Example
//!
//! ```no_run
//! use droidforge_github::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GitHubClient::new("droidforge", "apk-builder", "ghp_token");
//!
//!     client.dispatch_workflow("build-apk.yml", "main").await?;
//!     Ok(())
//! }
//! ```

mod actions;
mod contents;
pub mod contract;
pub mod error;

// Re-export commonly used types
pub use contract::CiBackend;
pub use error::{ClientError, Result};

#[cfg(feature = "test-export-mocks")]
pub use contract::MockCiBackend;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Default API root for github.com
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("droidforge/", env!("CARGO_PKG_VERSION"));

/// Media type the REST API expects
const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API, scoped to one repository
///
/// All requests carry the bearer credential, the GitHub media type and a
/// User-Agent. The base URL is overridable for tests and for GitHub
/// Enterprise deployments.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// API root (e.g. "https://api.github.com")
    base_url: String,
    /// Repository owner (user or organisation)
    owner: String,
    /// Repository name
    repo: String,
    /// Bearer credential; an empty token is allowed and fails on first use
    token: String,
    /// HTTP client instance
    client: Client,
}

impl GitHubClient {
    /// Create a client for a repository on github.com
    ///
    /// # Example
    /// ```
    /// use droidforge_github::GitHubClient;
    ///
    /// let client = GitHubClient::new("droidforge", "apk-builder", "ghp_token");
    /// ```
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, owner, repo, token)
    }

    /// Create a client against a custom API root
    ///
    /// Used by tests and by GitHub Enterprise installations where the API
    /// lives under the appliance host.
    pub fn with_base_url(
        base_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Get the API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL prefix for the repository this client is scoped to
    pub(crate) fn repo_url(&self) -> String {
        format!("{}/repos/{}/{}", self.base_url, self.owner, self.repo)
    }

    /// Attach the credential and the headers GitHub requires
    pub(crate) fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, GITHUB_JSON)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an error carrying the remote
    /// status and body if the request failed, or deserializes the body
    /// if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body we discard (e.g. dispatch, file write)
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
