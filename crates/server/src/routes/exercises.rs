use axum::{
    extract::{Form, Path},
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use shared::{
    api::{
        error::ServerError,
        payloads::{CreateExercisePayload, ExerciseDetails, ExerciseResponse},
        response_errors::{CreateExerciseError, UserLookupError},
    },
    model::{Exercise, NewExercise, User},
    types::Uuid,
};
use tracing::{info, instrument};

use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn create_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    WithRejection(Form(payload), _): WithRejection<
        Form<CreateExercisePayload>,
        ServerError<CreateExerciseError>,
    >,
) -> Result<Json<ExerciseResponse>, ServerError<CreateExerciseError>> {
    let details = ExerciseDetails::try_from(payload)?;
    // Anything that isn't one of our ids can't name a user
    let user_id = Uuid::parse(&id).map_err(|_| UserLookupError::UserNotFound)?;
    let today = Utc::now().date_naive();

    let (user, exercise) = conn
        .interact(move |conn| {
            let user = User::fetch_maybe(conn, &user_id)?.ok_or(UserLookupError::UserNotFound)?;
            let exercise = Exercise::create(conn, NewExercise::new(user.id, details, today))?;
            Ok::<_, ServerError<CreateExerciseError>>((user, exercise))
        })
        .await??;
    info!(id = %exercise.id, user_id = %user.id, "Created exercise");

    Ok(Json(ExerciseResponse::new(&user, &exercise)))
}
