//! Backend contract for the build relay
//!
//! A single trait covering the six outbound operations the build
//! pipeline performs against the hosting service. The orchestration
//! layer depends only on this trait; [`GitHubClient`] is the production
//! implementor, and the trait is annotated for `mockall` so consumers
//! can generate deterministic mocks for their tests.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::GitHubClient;
use crate::error::Result;
use droidforge_core::domain::artifact::Artifact;
use droidforge_core::domain::run::WorkflowRun;

/// Operations the build pipeline needs from the hosting service
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait CiBackend: Send + Sync {
    /// Probe a remote file and return its current version token, if it exists
    async fn get_file_sha(&self, path: &str, branch: &str) -> Result<Option<String>>;

    /// Create or update a remote file; `sha` is required when overwriting
    async fn put_file<'a>(
        &self,
        path: &str,
        branch: &str,
        message: &str,
        content: &[u8],
        sha: Option<&'a str>,
    ) -> Result<()>;

    /// Start one run of a named workflow against a branch
    async fn dispatch_workflow(&self, workflow_file: &str, branch: &str) -> Result<()>;

    /// Fetch the most recent run of a workflow on a branch, if any
    async fn latest_run(&self, workflow_file: &str, branch: &str) -> Result<Option<WorkflowRun>>;

    /// List the artifacts attached to a completed run
    async fn list_artifacts(&self, run_id: i64) -> Result<Vec<Artifact>>;

    /// Download an artifact's zip archive as raw bytes
    async fn download_artifact(&self, artifact_id: i64) -> Result<Vec<u8>>;
}

#[async_trait]
impl CiBackend for GitHubClient {
    async fn get_file_sha(&self, path: &str, branch: &str) -> Result<Option<String>> {
        GitHubClient::get_file_sha(self, path, branch).await
    }

    async fn put_file<'a>(
        &self,
        path: &str,
        branch: &str,
        message: &str,
        content: &[u8],
        sha: Option<&'a str>,
    ) -> Result<()> {
        GitHubClient::put_file(self, path, branch, message, content, sha).await
    }

    async fn dispatch_workflow(&self, workflow_file: &str, branch: &str) -> Result<()> {
        GitHubClient::dispatch_workflow(self, workflow_file, branch).await
    }

    async fn latest_run(&self, workflow_file: &str, branch: &str) -> Result<Option<WorkflowRun>> {
        GitHubClient::latest_run(self, workflow_file, branch).await
    }

    async fn list_artifacts(&self, run_id: i64) -> Result<Vec<Artifact>> {
        GitHubClient::list_artifacts(self, run_id).await
    }

    async fn download_artifact(&self, artifact_id: i64) -> Result<Vec<u8>> {
        GitHubClient::download_artifact(self, artifact_id).await
    }
}
