//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use relay_types::{BillSink, ErrorResponse, RelayError, RelayedResponse, SkippedResponse};

use crate::service::{RelayOutcome, RelayService, parse_notification};

/// Application state shared across handlers.
pub struct AppState<S: BillSink> {
    pub service: RelayService<S>,
}

/// Wrapper to implement IntoResponse for RelayError (orphan rule workaround).
pub struct ApiError(pub RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            RelayError::InvalidJson(details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    details: Some(details),
                    ..ErrorResponse::new("Invalid JSON")
                },
            ),
            RelayError::InvalidStructure => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid structure"),
            ),
            RelayError::UnknownPayer { source_name } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    source_name: Some(source_name),
                    ..ErrorResponse::new("Unknown payer")
                },
            ),
            RelayError::Failed { message, raw } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    raw: Some(raw),
                    ..ErrorResponse::new(message)
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Receives a Firefly III "transaction created" webhook.
///
/// The body is read as bytes and decoded regardless of the declared
/// content type. A non-2xx answer from IHM is still reported with 200.
#[tracing::instrument(skip_all)]
pub async fn firefly_webhook<S: BillSink>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    tracing::info!("Received POST to /firefly-webhook");

    let notification = parse_notification(&body)?;

    let response = match state.service.relay(notification).await? {
        RelayOutcome::Skipped => {
            (StatusCode::OK, Json(SkippedResponse::not_relayed())).into_response()
        }
        RelayOutcome::Relayed(reply) => {
            let body = RelayedResponse {
                status: reply.status,
                ihm_response: reply.body,
            };
            tracing::info!(status = body.status, ihm_response = %body.ihm_response, "Relayed");
            (StatusCode::OK, Json(body)).into_response()
        }
    };

    Ok(response)
}
