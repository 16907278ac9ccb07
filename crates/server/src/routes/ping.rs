use axum::Json;
use tracing::instrument;

/// Liveness check. Answers `null` without touching the database
#[instrument]
pub async fn ping() -> Json<()> {
    Json(())
}
