//! Integration tests for signup, login, and the health check.

use serde_json::{Value, json};

use krishibazaar_integration_tests::spawn_app;

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;

    let resp = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

// ============================================================================
// Signup
// ============================================================================

#[tokio::test]
async fn test_signup_returns_created_profile() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/signup"))
        .json(&json!({
            "name": "Asha",
            "role": "farmer",
            "email": "asha@example.com",
            "password": "secret"
        }))
        .send()
        .await
        .expect("Failed to send signup");

    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["id"], "u_1");
    assert_eq!(body["role"], "farmer");
    assert_eq!(body["email"], "asha@example.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = spawn_app().await;

    // the seed data already holds an account with this email
    let resp = app
        .client
        .post(app.url("/signup"))
        .json(&json!({
            "name": "Someone Else",
            "role": "merchant",
            "email": "farmer@example.com",
            "password": "other"
        }))
        .send()
        .await
        .expect("Failed to send signup");

    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], "DuplicateEmail");
    assert_eq!(body["message"], "an account with this email already exists");
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_returns_seeded_profile() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/login"))
        .json(&json!({"email": "farmer@example.com", "password": "pass123"}))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["id"], "u1");
    assert_eq!(body["name"], "Farmer Ramu");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/login"))
        .json(&json!({"email": "farmer@example.com", "password": "wrong"}))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], "InvalidCredentials");
    assert_eq!(body["message"], "invalid email or password");
}

#[tokio::test]
async fn test_signup_then_login_round_trip() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/signup"))
        .json(&json!({
            "name": "Asha",
            "role": "merchant",
            "email": "asha@example.com",
            "password": "secret"
        }))
        .send()
        .await
        .expect("Failed to send signup");
    assert_eq!(resp.status(), 201);

    let resp = app
        .client
        .post(app.url("/login"))
        .json(&json!({"email": "asha@example.com", "password": "secret"}))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["id"], "u_1");
    assert_eq!(body["role"], "merchant");
}
