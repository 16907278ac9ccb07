use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use deadpool_sqlite::Pool;
use http_body_util::BodyExt;
use serde_json::Value;
use shared::api::Object;
use tempfile::TempDir;
use tower::util::ServiceExt;
use tracker_server::{app, cors_layer, db, AppState};

pub struct TestApp {
    pub router: Router,
    pub pool: Pool,
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let path = path.to_str().unwrap();

        db::run_migrations(path).unwrap();
        let pool = db::create_pool(path).unwrap();
        let router = app(AppState { pool: pool.clone() }, cors_layer(None).unwrap());

        Self {
            router,
            pool,
            _dir: dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Posts `form` as `application/x-www-form-urlencoded`
    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    pub async fn create_user(&self, username: &str) -> String {
        let (status, json) = self
            .post_form(Object::Users.path(), &format!("username={username}"))
            .await;
        assert_eq!(status, StatusCode::OK, "{json}");
        json["_id"].as_str().unwrap().to_owned()
    }

    pub async fn count_rows(&self, table: &'static str) -> i64 {
        let conn = self.pool.get().await.unwrap();
        conn.interact(move |conn| {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        })
        .await
        .unwrap()
        .unwrap()
    }
}
