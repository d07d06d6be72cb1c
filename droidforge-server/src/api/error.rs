//! API Error Handling
//!
//! Unified error types and conversion for API responses. Every failure
//! surfaces as a flat JSON object with an `error` message; a remote run
//! that completed unsuccessfully additionally carries its status,
//! conclusion and public URL.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::build::BuildError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    RunFailed {
        status: String,
        conclusion: String,
        html_url: String,
    },
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            ApiError::RunFailed {
                status,
                conclusion,
                html_url,
            } => {
                tracing::error!("Remote build failed: {} ({})", conclusion, html_url);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "error": "remote build completed unsuccessfully",
                        "status": status,
                        "conclusion": conclusion,
                        "html_url": html_url,
                    })),
                )
                    .into_response()
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Build pipeline error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": msg })),
                )
                    .into_response()
            }
        }
    }
}

impl From<BuildError> for ApiError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Remote(e) => ApiError::InternalError(format!("remote call failed: {}", e)),
            BuildError::RunFailed {
                status,
                conclusion,
                html_url,
            } => ApiError::RunFailed {
                status,
                conclusion,
                html_url,
            },
            BuildError::ArtifactMissing(name) => {
                ApiError::InternalError(format!("run has no artifact named `{}`", name))
            }
            BuildError::EntryMissing(suffix) => ApiError::InternalError(format!(
                "artifact bundle has no entry ending in `{}`",
                suffix
            )),
            BuildError::BadBundle(msg) => {
                ApiError::InternalError(format!("artifact bundle could not be read: {}", msg))
            }
            BuildError::Timeout { attempts, delay } => ApiError::InternalError(format!(
                "build did not complete after {} checks {}s apart",
                attempts,
                delay.as_secs()
            )),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use droidforge_github::ClientError;
    use std::time::Duration;

    #[test]
    fn test_remote_error_message_carries_status_code() {
        let err = ApiError::from(BuildError::Remote(ClientError::api_error(422, "nope")));
        match err {
            ApiError::InternalError(msg) => assert!(msg.contains("422")),
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_timeout_message_names_the_budget() {
        let err = ApiError::from(BuildError::Timeout {
            attempts: 30,
            delay: Duration::from_secs(5),
        });
        match err {
            ApiError::InternalError(msg) => {
                assert!(msg.contains("30"));
                assert!(msg.contains("5s"));
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_run_failure_maps_to_its_own_variant() {
        let err = ApiError::from(BuildError::RunFailed {
            status: "completed".to_string(),
            conclusion: "failure".to_string(),
            html_url: "https://github.com/droidforge/apk-builder/actions/runs/9".to_string(),
        });
        assert!(matches!(err, ApiError::RunFailed { .. }));
    }
}
