use axum::{
    http::{header::InvalidHeaderValue, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    routes::{create_exercise, create_user, fetch_logs, list_users, ping},
    AppState,
};

/// Allows any origin unless one is given
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    let layer = match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(HeaderValue::from_str(origin)?)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };
    Ok(layer)
}

pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(Object::Ping.path(), get(ping))
        .route(Object::Users.path(), get(list_users).post(create_user))
        .route(Object::UserExercises.path(), post(create_exercise))
        .route(Object::UserLogs.path(), get(fetch_logs))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(cors),
        )
        .with_state(state)
}
