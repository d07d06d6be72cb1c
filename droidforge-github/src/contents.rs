//! Repository contents endpoints

use crate::GitHubClient;
use crate::error::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use droidforge_core::dto::contents::{ContentFile, WriteFileRequest};
use reqwest::StatusCode;

impl GitHubClient {
    // =============================================================================
    // Contents
    // =============================================================================

    /// Probe a file on a branch and return its current blob sha
    ///
    /// The sha is the version token a subsequent [`put_file`] must carry
    /// to overwrite the file. A missing file maps to `Ok(None)` rather
    /// than an error; any other non-success status is surfaced.
    ///
    /// [`put_file`]: GitHubClient::put_file
    pub async fn get_file_sha(&self, path: &str, branch: &str) -> Result<Option<String>> {
        let url = format!("{}/contents/{}?ref={}", self.repo_url(), path, branch);
        tracing::debug!("Probing remote file {} on {}", path, branch);

        let response = self.authed(self.client.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Remote file {} does not exist yet", path);
            return Ok(None);
        }

        let file: ContentFile = self.handle_response(response).await?;
        Ok(Some(file.sha))
    }

    /// Create or update a file on a branch with the given bytes
    ///
    /// # Arguments
    /// * `path` - Repository path of the file
    /// * `branch` - Target branch
    /// * `message` - Commit message for the write
    /// * `content` - Raw file bytes; encoded to base64 on the wire
    /// * `sha` - Version token of the existing file, `None` when creating
    pub async fn put_file(
        &self,
        path: &str,
        branch: &str,
        message: &str,
        content: &[u8],
        sha: Option<&str>,
    ) -> Result<()> {
        let url = format!("{}/contents/{}", self.repo_url(), path);
        let req = WriteFileRequest {
            message: message.to_string(),
            content: STANDARD.encode(content),
            branch: branch.to_string(),
            sha: sha.map(str::to_owned),
        };

        tracing::debug!(
            "Writing {} bytes to {} on {} ({})",
            content.len(),
            path,
            branch,
            if sha.is_some() { "update" } else { "create" }
        );

        let response = self.authed(self.client.put(&url)).json(&req).send().await?;

        self.handle_empty_response(response).await
    }
}
