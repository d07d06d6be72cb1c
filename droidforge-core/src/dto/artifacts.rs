//! Artifact listing envelope

use crate::domain::artifact::Artifact;
use serde::{Deserialize, Serialize};

/// Response page of `GET /repos/{owner}/{repo}/actions/runs/{id}/artifacts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsPage {
    pub total_count: i64,
    pub artifacts: Vec<Artifact>,
}
