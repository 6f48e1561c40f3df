//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use roombook_auth::password::PasswordHasher;
use roombook_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with a clean database
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db = roombook_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.pool().clone();

        roombook_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = roombook_api::AppState::build(Arc::new(config.clone()), db_pool.clone());
        let router = roombook_api::build_router(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["bookings", "password_reset_tokens", "rooms", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> Uuid {
        self.create_test_user_with_suspension(email, password, role, false)
            .await
    }

    /// Create a test user with an explicit suspension flag
    pub async fn create_test_user_with_suspension(
        &self,
        email: &str,
        password: &str,
        role: &str,
        suspended: bool,
    ) -> Uuid {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("Failed to hash password");
        let id = Uuid::new_v4();
        let name = email.split('@').next().unwrap_or("user");

        sqlx::query(
            r#"INSERT INTO users (id, name, email, password_hash, role, is_suspended)
               VALUES ($1, $2, $3, $4, $5::user_role, $6)"#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(&hash)
        .bind(role)
        .bind(suspended)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Create a test room and return its ID
    pub async fn create_test_room(&self, name: &str, auto_approve: bool) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO rooms (id, name, capacity, location, auto_approve)
               VALUES ($1, $2, 8, 'Floor 1', $3)"#,
        )
        .bind(id)
        .bind(name)
        .bind(auto_approve)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test room");

        id
    }

    /// Sign in and return the session token
    pub async fn sign_in(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/signin", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Sign-in failed: {:?}",
            response.body
        );

        response
            .body
            .pointer("/data/token")
            .and_then(|v| v.as_str())
            .expect("No token in sign-in response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
