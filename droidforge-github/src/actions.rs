//! Workflow and artifact endpoints

use crate::GitHubClient;
use crate::error::Result;
use droidforge_core::domain::artifact::Artifact;
use droidforge_core::domain::run::WorkflowRun;
use droidforge_core::dto::artifacts::ArtifactsPage;
use droidforge_core::dto::dispatch::DispatchRequest;
use droidforge_core::dto::runs::RunsPage;

impl GitHubClient {
    // =============================================================================
    // Workflows & Runs
    // =============================================================================

    /// Ask the Actions service to start one run of a workflow on a branch
    ///
    /// The dispatch endpoint returns 204 with no body, so the run this
    /// creates cannot be identified here; callers recover it by listing
    /// runs afterwards.
    pub async fn dispatch_workflow(&self, workflow_file: &str, branch: &str) -> Result<()> {
        let url = format!(
            "{}/actions/workflows/{}/dispatches",
            self.repo_url(),
            workflow_file
        );
        let req = DispatchRequest {
            ref_field: branch.to_string(),
        };

        tracing::debug!("Dispatching workflow {} on {}", workflow_file, branch);

        let response = self.authed(self.client.post(&url)).json(&req).send().await?;

        self.handle_empty_response(response).await
    }

    /// Fetch the most recent run of a workflow on a branch, if any
    pub async fn latest_run(&self, workflow_file: &str, branch: &str) -> Result<Option<WorkflowRun>> {
        let url = format!(
            "{}/actions/workflows/{}/runs?branch={}&per_page=1",
            self.repo_url(),
            workflow_file,
            branch
        );

        let response = self.authed(self.client.get(&url)).send().await?;
        let page: RunsPage = self.handle_response(response).await?;

        Ok(page.workflow_runs.into_iter().next())
    }

    // =============================================================================
    // Artifacts
    // =============================================================================

    /// List the artifacts attached to a run
    pub async fn list_artifacts(&self, run_id: i64) -> Result<Vec<Artifact>> {
        let url = format!("{}/actions/runs/{}/artifacts", self.repo_url(), run_id);

        let response = self.authed(self.client.get(&url)).send().await?;
        let page: ArtifactsPage = self.handle_response(response).await?;

        tracing::debug!("Run {} has {} artifact(s)", run_id, page.total_count);

        Ok(page.artifacts)
    }

    /// Download an artifact's zip archive
    ///
    /// The endpoint answers with a redirect to blob storage, which the
    /// underlying client follows. Returns the raw archive bytes.
    pub async fn download_artifact(&self, artifact_id: i64) -> Result<Vec<u8>> {
        let url = format!("{}/actions/artifacts/{}/zip", self.repo_url(), artifact_id);

        tracing::debug!("Downloading artifact {}", artifact_id);

        let response = self.authed(self.client.get(&url)).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(crate::ClientError::api_error(status.as_u16(), error_text));
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Artifact {} is {} bytes", artifact_id, bytes.len());

        Ok(bytes.to_vec())
    }
}
