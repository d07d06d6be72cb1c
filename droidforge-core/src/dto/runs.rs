//! Workflow run listing envelope

use crate::domain::run::WorkflowRun;
use serde::{Deserialize, Serialize};

/// Response page of `GET /repos/{owner}/{repo}/actions/workflows/{id}/runs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunsPage {
    pub total_count: i64,
    pub workflow_runs: Vec<WorkflowRun>,
}
