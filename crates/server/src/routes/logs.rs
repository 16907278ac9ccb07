use axum::{extract::Path, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::LogResponse,
        response_errors::{FetchLogError, UserLookupError},
    },
    model::{Exercise, User},
    types::Uuid,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn fetch_logs(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
) -> Result<Json<LogResponse>, ServerError<FetchLogError>> {
    let user_id = Uuid::parse(&id).map_err(|_| UserLookupError::UserNotFound)?;

    let log = conn
        .interact(move |conn| {
            let user = User::fetch_maybe(conn, &user_id)?.ok_or(UserLookupError::UserNotFound)?;
            let exercises = Exercise::fetch_by_user_id(conn, &user.id)?;
            Ok::<_, ServerError<FetchLogError>>(LogResponse::new(&user, &exercises))
        })
        .await??;

    Ok(Json(log))
}
