//! OpenAPI specification of the relay endpoints.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use relay_types::dto::{ErrorResponse, RelayedResponse, SkippedResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Relay a Firefly III transaction to IHateMoney
///
/// Only the first transaction of the notification is read. Transactions
/// whose source account does not mention Sodexo are skipped.
#[utoipa::path(
    post,
    path = "/firefly-webhook",
    tag = "webhooks",
    request_body(
        content = inline(serde_json::Value),
        description = "Firefly III webhook notification",
        example = json!({"content": {"transactions": [{"description": "Lunch", "amount": "-12.30", "source_name": "Sodexo Giulia"}]}})
    ),
    responses(
        (status = 200, description = "Bill relayed with IHM's status and body, or `SkippedResponse` when the transaction is filtered out", body = RelayedResponse),
        (status = 400, description = "Invalid JSON, invalid structure or relay failure", body = ErrorResponse),
        (status = 422, description = "Payer could not be derived (only when rejection is enabled)", body = ErrorResponse)
    )
)]
async fn firefly_webhook() {}

/// OpenAPI documentation for the relay.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Firefly to IHateMoney Relay",
        version = "1.0.0",
        description = "Receives Firefly III transaction webhooks and records Sodexo expenses as bills in an IHateMoney project.",
        license(name = "MIT"),
    ),
    paths(health, firefly_webhook),
    components(schemas(RelayedResponse, SkippedResponse, ErrorResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "webhooks", description = "Inbound webhook endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_webhook_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/firefly-webhook"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
