//! Integration tests for user management and the authorization gate.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_super_admin_creates_staff_with_default_password() {
    let app = TestApp::new().await;
    app.create_test_user("root@test.com", "rootpass123", "SUPER_ADMIN")
        .await;
    let token = app.sign_in("root@test.com", "rootpass123").await;

    // No password supplied: the role-specific default applies.
    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Jane",
                "email": "jane@x.com",
                "role": "STAFF",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body.pointer("/data/role").unwrap(), "STAFF");

    // The new user can sign in with the configured default.
    let default_pw = app.config.auth.default_staff_password.clone();
    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({"email": "jane@x.com", "password": default_pw})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.pointer("/data/user/role").unwrap(), "STAFF");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_admin_cannot_create_users() {
    let app = TestApp::new().await;
    app.create_test_user("admin@test.com", "adminpass1", "ADMIN")
        .await;
    let token = app.sign_in("admin@test.com", "adminpass1").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "New",
                "email": "new@test.com",
                "role": "STAFF",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_duplicate_email_conflict() {
    let app = TestApp::new().await;
    app.create_test_user("root@test.com", "rootpass123", "SUPER_ADMIN")
        .await;
    app.create_test_user("taken@test.com", "password123", "STAFF")
        .await;
    let token = app.sign_in("root@test.com", "rootpass123").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Dup",
                "email": "taken@test.com",
                "role": "STAFF",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_admin_suspends_staff_but_not_admin() {
    let app = TestApp::new().await;
    app.create_test_user("admin@test.com", "adminpass1", "ADMIN")
        .await;
    let staff_id = app
        .create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    let peer_id = app
        .create_test_user("peer@test.com", "password123", "ADMIN")
        .await;
    let token = app.sign_in("admin@test.com", "adminpass1").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}/suspend", staff_id),
            Some(serde_json::json!({"is_suspended": true})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/is_suspended").unwrap(),
        true
    );

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}/suspend", peer_id),
            Some(serde_json::json!({"is_suspended": true})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_admin_listing_scoped_to_staff() {
    let app = TestApp::new().await;
    app.create_test_user("admin@test.com", "adminpass1", "ADMIN")
        .await;
    app.create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    app.create_test_user("root@test.com", "rootpass123", "SUPER_ADMIN")
        .await;
    let token = app.sign_in("admin@test.com", "adminpass1").await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let users = response.body.pointer("/data").unwrap().as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].get("role").unwrap(), "STAFF");

    // An explicit role filter is ANDed with the implicit restriction.
    let response = app
        .request("GET", "/api/users?role=ADMIN", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.pointer("/data").unwrap().as_array().unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_staff_cannot_list_users() {
    let app = TestApp::new().await;
    app.create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    let token = app.sign_in("staff@test.com", "password123").await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_only_super_admin_changes_roles() {
    let app = TestApp::new().await;
    app.create_test_user("root@test.com", "rootpass123", "SUPER_ADMIN")
        .await;
    app.create_test_user("admin@test.com", "adminpass1", "ADMIN")
        .await;
    let staff_id = app
        .create_test_user("staff@test.com", "password123", "STAFF")
        .await;

    let admin_token = app.sign_in("admin@test.com", "adminpass1").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}", staff_id),
            Some(serde_json::json!({"role": "ADMIN"})),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let root_token = app.sign_in("root@test.com", "rootpass123").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}", staff_id),
            Some(serde_json::json!({"role": "ADMIN"})),
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.pointer("/data/role").unwrap(), "ADMIN");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_partial_update_leaves_other_fields() {
    let app = TestApp::new().await;
    app.create_test_user("root@test.com", "rootpass123", "SUPER_ADMIN")
        .await;
    let staff_id = app
        .create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    let token = app.sign_in("root@test.com", "rootpass123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}", staff_id),
            Some(serde_json::json!({"name": "Renamed"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.pointer("/data/name").unwrap(), "Renamed");
    assert_eq!(
        response.body.pointer("/data/email").unwrap(),
        "staff@test.com"
    );
    assert_eq!(response.body.pointer("/data/role").unwrap(), "STAFF");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_only_super_admin_deletes_users() {
    let app = TestApp::new().await;
    app.create_test_user("root@test.com", "rootpass123", "SUPER_ADMIN")
        .await;
    app.create_test_user("admin@test.com", "adminpass1", "ADMIN")
        .await;
    let staff_id = app
        .create_test_user("staff@test.com", "password123", "STAFF")
        .await;

    let admin_token = app.sign_in("admin@test.com", "adminpass1").await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{}", staff_id),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let root_token = app.sign_in("root@test.com", "rootpass123").await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{}", staff_id),
            None,
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_suspended_caller_cannot_mutate_despite_valid_token() {
    let app = TestApp::new().await;
    let admin_id = app
        .create_test_user("admin@test.com", "adminpass1", "ADMIN")
        .await;
    let staff_id = app
        .create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    let token = app.sign_in("admin@test.com", "adminpass1").await;

    // Suspend the admin after their token was issued.
    sqlx::query("UPDATE users SET is_suspended = TRUE WHERE id = $1")
        .bind(admin_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to suspend admin");

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}/suspend", staff_id),
            Some(serde_json::json!({"is_suspended": true})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
