use axum::{extract::Form, Json};
use axum_extra::extract::WithRejection;
use shared::{
    api::{
        error::ServerError,
        payloads::CreateUserPayload,
        response_errors::{CreateUserError, ListUsersError},
    },
    model::{NewUser, User},
};
use tracing::{info, instrument};

use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn list_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<User>>, ServerError<ListUsersError>> {
    let users = conn.interact(|conn| User::fetch_all(conn)).await??;

    Ok(Json(users))
}

#[instrument(skip(conn))]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    WithRejection(Form(payload), _): WithRejection<
        Form<CreateUserPayload>,
        ServerError<CreateUserError>,
    >,
) -> Result<Json<User>, ServerError<CreateUserError>> {
    let new_user = NewUser::try_from(payload)?;

    let user = conn
        .interact(move |conn| User::create(conn, new_user))
        .await??;
    info!(id = %user.id, username = %user.username, "Created user");

    Ok(Json(user))
}
