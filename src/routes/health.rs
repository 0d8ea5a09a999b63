use axum::http::StatusCode;

/// Health check endpoint
///
/// Returns 200 OK if the service is running.
/// This endpoint is suitable for Kubernetes probes.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Plain-text banner on the API root, kept for the dashboard's
/// connectivity check.
pub async fn banner() -> &'static str {
    "Blue Horizon API is running!"
}
