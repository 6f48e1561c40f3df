//! Integration tests for the bootstrap SUPER_ADMIN seed.

use std::sync::Arc;

use http::StatusCode;

use roombook_auth::password::PasswordHasher;
use roombook_core::config::auth::SeedConfig;
use roombook_database::repositories::user::UserRepository;
use roombook_service::seed::seed_super_admin;

use crate::helpers::TestApp;

fn seed_config() -> SeedConfig {
    SeedConfig {
        enabled: true,
        name: "Super Admin".to_string(),
        email: "bootstrap@test.com".to_string(),
        password: "BootstrapPassword1!".to_string(),
    }
}

async fn run_seed(app: &TestApp, config: &SeedConfig) {
    let user_repo = Arc::new(UserRepository::new(app.db_pool.clone()));
    let hasher = Arc::new(PasswordHasher::new());
    seed_super_admin(config, &user_repo, &hasher)
        .await
        .expect("Seed failed");
}

async fn count_super_admins(app: &TestApp) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'SUPER_ADMIN'")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count")
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_seed_creates_super_admin_once() {
    let app = TestApp::new().await;
    let config = seed_config();

    run_seed(&app, &config).await;
    assert_eq!(count_super_admins(&app).await, 1);

    // The seeded account can sign in with the configured password.
    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "email": "bootstrap@test.com",
                "password": "BootstrapPassword1!",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/user/role").unwrap(),
        "SUPER_ADMIN"
    );

    // Rerunning is a no-op.
    run_seed(&app, &config).await;
    assert_eq!(count_super_admins(&app).await, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_seed_skipped_when_super_admin_exists_under_other_email() {
    let app = TestApp::new().await;
    app.create_test_user("root@test.com", "rootpass123", "SUPER_ADMIN")
        .await;

    run_seed(&app, &seed_config()).await;

    assert_eq!(count_super_admins(&app).await, 1);
    let seeded: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("bootstrap@test.com")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count");
    assert_eq!(seeded, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_seed_noop_after_seeded_email_changes() {
    let app = TestApp::new().await;
    let config = seed_config();
    run_seed(&app, &config).await;

    // The seeded account gets renamed; a restart must not create a second one.
    sqlx::query("UPDATE users SET email = 'renamed@test.com' WHERE email = $1")
        .bind(&config.email)
        .execute(&app.db_pool)
        .await
        .expect("Failed to rename");

    run_seed(&app, &config).await;
    assert_eq!(count_super_admins(&app).await, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_seed_disabled_does_nothing() {
    let app = TestApp::new().await;
    let config = SeedConfig {
        enabled: false,
        ..seed_config()
    };

    run_seed(&app, &config).await;
    assert_eq!(count_super_admins(&app).await, 0);
}
