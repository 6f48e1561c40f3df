//! Integration tests for rooms, bookings, and history.

use http::StatusCode;

use crate::helpers::TestApp;

fn booking_body(room_id: uuid::Uuid) -> serde_json::Value {
    serde_json::json!({
        "room_id": room_id,
        "start_time": "2026-09-01T09:00:00Z",
        "end_time": "2026-09-01T10:00:00Z",
    })
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_rooms_listing_excludes_suspended() {
    let app = TestApp::new().await;
    app.create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    app.create_test_room("Open Room", false).await;
    let frozen_id = app.create_test_room("Frozen Room", false).await;

    sqlx::query("UPDATE rooms SET suspended_until = NOW() + INTERVAL '1 day' WHERE id = $1")
        .bind(frozen_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to suspend room");

    let token = app.sign_in("staff@test.com", "password123").await;
    let response = app.request("GET", "/api/rooms", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let rooms = response.body.pointer("/data").unwrap().as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].get("name").unwrap(), "Open Room");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_booking_status_follows_auto_approve() {
    let app = TestApp::new().await;
    app.create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    let auto_room = app.create_test_room("Auto Room", true).await;
    let manual_room = app.create_test_room("Manual Room", false).await;
    let token = app.sign_in("staff@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(auto_room)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body.pointer("/data/status").unwrap(), "APPROVED");

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(manual_room)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.pointer("/data/status").unwrap(), "PENDING");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_cannot_book_suspended_room() {
    let app = TestApp::new().await;
    app.create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    let room_id = app.create_test_room("Frozen Room", false).await;

    sqlx::query("UPDATE rooms SET suspended_until = NOW() + INTERVAL '1 day' WHERE id = $1")
        .bind(room_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to suspend room");

    let token = app.sign_in("staff@test.com", "password123").await;
    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(room_id)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_history_shows_only_own_bookings() {
    let app = TestApp::new().await;
    app.create_test_user("alice@test.com", "password123", "STAFF")
        .await;
    app.create_test_user("bob@test.com", "password123", "STAFF")
        .await;
    let room_id = app.create_test_room("Shared Room", true).await;

    let alice_token = app.sign_in("alice@test.com", "password123").await;
    let bob_token = app.sign_in("bob@test.com", "password123").await;

    app.request(
        "POST",
        "/api/bookings",
        Some(booking_body(room_id)),
        Some(&alice_token),
    )
    .await;

    let response = app
        .request("GET", "/api/history", None, Some(&bob_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let bookings = response.body.pointer("/data").unwrap().as_array().unwrap();
    assert!(bookings.is_empty());

    let response = app
        .request("GET", "/api/history", None, Some(&alice_token))
        .await;
    let bookings = response.body.pointer("/data").unwrap().as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].get("room_name").unwrap(), "Shared Room");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_cancel_own_booking_but_not_others() {
    let app = TestApp::new().await;
    app.create_test_user("alice@test.com", "password123", "STAFF")
        .await;
    app.create_test_user("bob@test.com", "password123", "STAFF")
        .await;
    let room_id = app.create_test_room("Shared Room", true).await;

    let alice_token = app.sign_in("alice@test.com", "password123").await;
    let bob_token = app.sign_in("bob@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(room_id)),
            Some(&alice_token),
        )
        .await;
    let booking_id = response
        .body
        .pointer("/data/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    // Bob cannot cancel Alice's booking.
    let response = app
        .request(
            "DELETE",
            &format!("/api/history?id={}", booking_id),
            None,
            Some(&bob_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Alice can.
    let response = app
        .request(
            "DELETE",
            &format!("/api/history?id={}", booking_id),
            None,
            Some(&alice_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/history", None, Some(&alice_token))
        .await;
    let bookings = response.body.pointer("/data").unwrap().as_array().unwrap();
    assert!(bookings.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_admin_can_cancel_any_booking() {
    let app = TestApp::new().await;
    app.create_test_user("alice@test.com", "password123", "STAFF")
        .await;
    app.create_test_user("admin@test.com", "adminpass1", "ADMIN")
        .await;
    let room_id = app.create_test_room("Shared Room", true).await;

    let alice_token = app.sign_in("alice@test.com", "password123").await;
    let admin_token = app.sign_in("admin@test.com", "adminpass1").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(room_id)),
            Some(&alice_token),
        )
        .await;
    let booking_id = response
        .body
        .pointer("/data/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/history?id={}", booking_id),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_booking_rejects_inverted_time_window() {
    let app = TestApp::new().await;
    app.create_test_user("staff@test.com", "password123", "STAFF")
        .await;
    let room_id = app.create_test_room("Room", true).await;
    let token = app.sign_in("staff@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "room_id": room_id,
                "start_time": "2026-09-01T10:00:00Z",
                "end_time": "2026-09-01T09:00:00Z",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
