use axum::extract::FromRef;
use deadpool_sqlite::Pool;

/// Shared by every handler. Created once at startup
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: Pool,
}

impl FromRef<AppState> for Pool {
    fn from_ref(app: &AppState) -> Pool {
        app.pool.clone()
    }
}
