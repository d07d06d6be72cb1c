//! Build API Handler
//!
//! The one real endpoint: accept an uploaded source archive, run the
//! build pipeline against the remote host and stream the binary back.

use axum::{
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::build;

/// Multipart field carrying the archive
const UPLOAD_FIELD: &str = "file";

/// Content type of the returned binary
const APK_CONTENT_TYPE: &str = "application/vnd.android.package-archive";

/// Filename advertised to the client
const APK_DISPOSITION: &str = "attachment; filename=\"app-debug.apk\"";

/// POST /api/build-apk
/// Run the full pipeline for one uploaded archive
///
/// The archive bytes live in a buffer owned by this request and are
/// released when the response is produced, success or not. A missing
/// upload is rejected before any remote call is made.
pub async fn build_apk(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    let mut archive: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {}", e)))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {}", e)))?;
            archive = Some(bytes.to_vec());
        }
    }

    let archive = archive
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("missing multipart field `{}`", UPLOAD_FIELD)))?;

    tracing::info!("Accepted archive upload ({} bytes)", archive.len());

    let apk = build::run_build(state.backend.as_ref(), &state.config, archive)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, APK_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, APK_DISPOSITION),
        ],
        apk,
    )
        .into_response())
}
