//! Run poller
//!
//! Waits for the dispatched workflow run to reach its terminal state.
//! Fixed attempt count, fixed spacing. The dispatch endpoint never
//! returns a run id, so the poller watches the most recent run of the
//! workflow on the branch and refuses the baseline run recorded before
//! dispatch — a stale completed run cannot be mistaken for the new one.

use droidforge_core::domain::run::WorkflowRun;
use droidforge_github::CiBackend;

use crate::config::Config;
use crate::service::build::BuildError;

/// Poll until a run newer than `baseline` reaches its terminal state
///
/// Performs at most `config.poll_attempts` status checks spaced
/// `config.poll_delay` apart. A terminal run is returned immediately
/// regardless of remaining attempts; exhausting the budget is a
/// [`BuildError::Timeout`].
pub async fn wait_for_run(
    backend: &dyn CiBackend,
    config: &Config,
    baseline: Option<i64>,
) -> Result<WorkflowRun, BuildError> {
    for attempt in 1..=config.poll_attempts {
        match backend
            .latest_run(&config.workflow_file, &config.branch)
            .await?
        {
            Some(run) if Some(run.id) == baseline => {
                tracing::debug!(
                    "Attempt {}/{}: run {} predates the dispatch, waiting",
                    attempt,
                    config.poll_attempts,
                    run.id
                );
            }
            Some(run) if run.is_terminal() => {
                tracing::info!(
                    "Run {} completed after {} check(s)",
                    run.id,
                    attempt
                );
                return Ok(run);
            }
            Some(run) => {
                tracing::debug!(
                    "Attempt {}/{}: run {} is {}",
                    attempt,
                    config.poll_attempts,
                    run.id,
                    run.status
                );
            }
            None => {
                tracing::debug!(
                    "Attempt {}/{}: no run visible yet",
                    attempt,
                    config.poll_attempts
                );
            }
        }

        if attempt < config.poll_attempts {
            tokio::time::sleep(config.poll_delay).await;
        }
    }

    Err(BuildError::Timeout {
        attempts: config.poll_attempts,
        delay: config.poll_delay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use droidforge_core::domain::run::{RunConclusion, RunStatus};
    use droidforge_github::MockCiBackend;
    use std::time::Duration;

    fn run(id: i64, status: RunStatus, conclusion: Option<RunConclusion>) -> WorkflowRun {
        WorkflowRun {
            id,
            status,
            conclusion,
            html_url: format!("https://github.com/droidforge/apk-builder/actions/runs/{id}"),
            head_branch: "main".to_string(),
            event: "workflow_dispatch".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_budget_is_bounded() {
        let config = Config::default();
        let mut backend = MockCiBackend::new();

        // A run that never completes: exactly poll_attempts checks, then timeout.
        backend
            .expect_latest_run()
            .times(30)
            .returning(|_, _| Ok(Some(run(5, RunStatus::InProgress, None))));

        let result = wait_for_run(&backend, &config, None).await;
        match result {
            Err(BuildError::Timeout { attempts, delay }) => {
                assert_eq!(attempts, 30);
                assert_eq!(delay, Duration::from_secs(5));
            }
            other => panic!("expected timeout, got {:?}", other.map(|r| r.id)),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_runs_at_all_times_out() {
        let config = Config::default();
        let mut backend = MockCiBackend::new();

        backend
            .expect_latest_run()
            .times(30)
            .returning(|_, _| Ok(None));

        let result = wait_for_run(&backend, &config, None).await;
        assert!(matches!(result, Err(BuildError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_terminal_run_returns_immediately() {
        let config = Config::default();
        let mut backend = MockCiBackend::new();

        backend
            .expect_latest_run()
            .times(1)
            .returning(|_, _| Ok(Some(run(6, RunStatus::Completed, Some(RunConclusion::Success)))));

        let result = wait_for_run(&backend, &config, None).await.unwrap();
        assert_eq!(result.id, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_baseline_run_is_never_accepted() {
        let config = Config::default();
        let mut backend = MockCiBackend::new();

        // First check still sees the old completed run, second sees the
        // run the dispatch created.
        let mut calls = 0;
        backend.expect_latest_run().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(Some(run(6, RunStatus::Completed, Some(RunConclusion::Success))))
            } else {
                Ok(Some(run(7, RunStatus::Completed, Some(RunConclusion::Failure))))
            }
        });

        let result = wait_for_run(&backend, &config, Some(6)).await.unwrap();
        assert_eq!(result.id, 7);
    }

    #[tokio::test]
    async fn test_remote_error_aborts_polling() {
        let config = Config::default();
        let mut backend = MockCiBackend::new();

        backend
            .expect_latest_run()
            .times(1)
            .returning(|_, _| Err(droidforge_github::ClientError::api_error(500, "boom")));

        let result = wait_for_run(&backend, &config, None).await;
        assert!(matches!(result, Err(BuildError::Remote(_))));
    }
}
