//! Server configuration
//!
//! Deployment coordinates are compile-time constants carried by
//! [`Config::default`]; only the bearer credential and the bind address
//! come from the environment. One deployment serves one repository, one
//! workflow and one branch.

use std::time::Duration;

/// Build relay configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Owner of the repository the source archive is published into
    pub repo_owner: String,

    /// Repository name
    pub repo_name: String,

    /// Branch the archive is committed to and the workflow runs against
    pub branch: String,

    /// Workflow definition filename inside .github/workflows/
    pub workflow_file: String,

    /// Repository path the uploaded archive is written to
    pub upload_path: String,

    /// Commit message for the archive write
    pub commit_message: String,

    /// Name of the result bundle the workflow uploads
    pub artifact_name: String,

    /// Filename suffix of the binary inside the result bundle
    pub artifact_suffix: String,

    /// Maximum number of run status checks before giving up
    pub poll_attempts: u32,

    /// Fixed delay between status checks
    pub poll_delay: Duration,

    /// Upper bound on the uploaded archive size
    pub max_upload_bytes: usize,

    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Bearer credential for the hosting service; absence is tolerated
    /// at startup and fails on the first remote call instead
    pub github_token: Option<String>,
}

impl Config {
    /// Creates configuration from the environment
    ///
    /// Only two values are environment-driven:
    /// - GITHUB_TOKEN (optional, warns when absent)
    /// - BIND_ADDR (optional, default: 0.0.0.0:8080)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match std::env::var("GITHUB_TOKEN") {
            Ok(token) if !token.is_empty() => config.github_token = Some(token),
            _ => {
                tracing::warn!("GITHUB_TOKEN not set; remote calls will fail until it is provided");
            }
        }

        if let Ok(addr) = std::env::var("BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.repo_owner.is_empty() || self.repo_name.is_empty() {
            anyhow::bail!("repository coordinates cannot be empty");
        }

        if self.branch.is_empty() {
            anyhow::bail!("branch cannot be empty");
        }

        if self.workflow_file.is_empty() {
            anyhow::bail!("workflow_file cannot be empty");
        }

        if self.upload_path.is_empty() {
            anyhow::bail!("upload_path cannot be empty");
        }

        if self.artifact_name.is_empty() || self.artifact_suffix.is_empty() {
            anyhow::bail!("artifact coordinates cannot be empty");
        }

        if self.poll_attempts == 0 {
            anyhow::bail!("poll_attempts must be greater than 0");
        }

        if self.poll_delay.is_zero() {
            anyhow::bail!("poll_delay must be greater than 0");
        }

        if self.max_upload_bytes == 0 {
            anyhow::bail!("max_upload_bytes must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_owner: "droidforge".to_string(),
            repo_name: "apk-builder".to_string(),
            branch: "main".to_string(),
            workflow_file: "build-apk.yml".to_string(),
            upload_path: "upload/source.zip".to_string(),
            commit_message: "Upload source archive".to_string(),
            artifact_name: "apk-bundle".to_string(),
            artifact_suffix: ".apk".to_string(),
            poll_attempts: 30,
            poll_delay: Duration::from_secs(5),
            max_upload_bytes: 64 * 1024 * 1024,
            bind_addr: "0.0.0.0:8080".to_string(),
            github_token: None,
        }
    }
}
