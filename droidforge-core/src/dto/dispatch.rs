//! Workflow dispatch request body

use serde::{Deserialize, Serialize};

/// Request body for `POST .../actions/workflows/{id}/dispatches`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Git ref to run the workflow against. `ref` is reserved in Rust.
    #[serde(rename = "ref")]
    pub ref_field: String,
}
