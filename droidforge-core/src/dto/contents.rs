//! Repository contents endpoint types

use serde::{Deserialize, Serialize};

/// Subset of the read-file response we care about: the blob sha is the
/// version token a subsequent write must carry to overwrite the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFile {
    pub sha: String,
    pub path: String,
}

/// Request body for `PUT /repos/{owner}/{repo}/contents/{path}`
///
/// `content` is base64-encoded file data. `sha` must be present when
/// updating an existing file and absent when creating a new one, so it
/// is left out of the JSON entirely when `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteFileRequest {
    pub message: String,
    pub content: String,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}
