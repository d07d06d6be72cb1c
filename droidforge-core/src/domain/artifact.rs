//! Artifact domain types

use serde::{Deserialize, Serialize};

/// A named result bundle attached to a completed workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: i64,
    pub name: String,
    pub size_in_bytes: i64,
    pub archive_download_url: String,
    pub expired: bool,
}
