//! Build Service
//!
//! Runs the build pipeline for one uploaded archive: publish the source,
//! dispatch the workflow, wait for the run, fetch the result bundle and
//! extract the binary. Stages run in strict sequence; the first failure
//! aborts the rest. Nothing is retried and nothing is rolled back — a
//! published archive and a dispatched run are left as-is on failure.

use std::time::Duration;

use droidforge_github::{CiBackend, ClientError};

use crate::config::Config;
use crate::service::{poller, unpack};

/// Service error type
#[derive(Debug)]
pub enum BuildError {
    /// A remote call answered with a non-success status
    Remote(ClientError),
    /// The run reached its terminal state with a non-success conclusion
    RunFailed {
        status: String,
        conclusion: String,
        html_url: String,
    },
    /// The completed run has no artifact with the expected name
    ArtifactMissing(String),
    /// The result bundle has no entry with the expected suffix
    EntryMissing(String),
    /// The result bundle could not be read as a zip archive
    BadBundle(String),
    /// The poll budget was exhausted without observing a terminal run
    Timeout { attempts: u32, delay: Duration },
}

impl From<ClientError> for BuildError {
    fn from(err: ClientError) -> Self {
        BuildError::Remote(err)
    }
}

/// Run the full build pipeline and return the extracted binary bytes
///
/// The archive buffer is owned by this call and released when it
/// returns, success or not.
pub async fn run_build(
    backend: &dyn CiBackend,
    config: &Config,
    archive: Vec<u8>,
) -> Result<Vec<u8>, BuildError> {
    // Publish: probe for an existing file first so the write carries its
    // version token, then create-or-update.
    let existing_sha = backend
        .get_file_sha(&config.upload_path, &config.branch)
        .await?;

    backend
        .put_file(
            &config.upload_path,
            &config.branch,
            &config.commit_message,
            &archive,
            existing_sha.as_deref(),
        )
        .await?;

    tracing::info!(
        "Published {} bytes to {} on {}",
        archive.len(),
        config.upload_path,
        config.branch
    );

    // Dispatch returns no run id, so record which run was most recent
    // beforehand; the poller will only accept a run newer than this.
    let baseline = backend
        .latest_run(&config.workflow_file, &config.branch)
        .await?
        .map(|run| run.id);

    backend
        .dispatch_workflow(&config.workflow_file, &config.branch)
        .await?;

    tracing::info!(
        "Dispatched workflow {} on {}",
        config.workflow_file,
        config.branch
    );

    let run = poller::wait_for_run(backend, config, baseline).await?;

    if !run.succeeded() {
        tracing::warn!("Run {} finished unsuccessfully: {}", run.id, run.html_url);
        return Err(BuildError::RunFailed {
            status: run.status.to_string(),
            conclusion: run
                .conclusion
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            html_url: run.html_url,
        });
    }

    // Fetch: find the named bundle among the run's artifacts, download it
    // and pull the binary out.
    let artifacts = backend.list_artifacts(run.id).await?;

    let artifact = artifacts
        .into_iter()
        .find(|a| a.name == config.artifact_name)
        .ok_or_else(|| BuildError::ArtifactMissing(config.artifact_name.clone()))?;

    let bundle = backend.download_artifact(artifact.id).await?;

    let binary = unpack::extract_entry(&bundle, &config.artifact_suffix)?;

    tracing::info!(
        "Run {} produced {} ({} bytes)",
        run.id,
        config.artifact_suffix,
        binary.len()
    );

    Ok(binary)
}
