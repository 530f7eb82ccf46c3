//! Integration tests for authentication flow.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use schoolhub_auth::{Claims, TokenService};
use schoolhub_core::config::SigningSecret;

use crate::helpers::{PASSWORD, TEST_SECRET, TestApp};

#[tokio::test]
async fn test_login_with_username() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "username": "mrossi", "password": PASSWORD }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let data = &response.body["data"];
    assert_eq!(data["id"], app.school.rossi);
    assert_eq!(data["role"], "teacher");
    assert_eq!(data["email"], "mrossi@school.test");
    assert!(data.get("password_hash").is_none());

    let token = data["token"].as_str().expect("token");
    let claims = app.tokens.verify(token).expect("token verifies");
    assert_eq!(claims.id, app.school.rossi);
    assert_eq!(claims.exp - claims.iat, Duration::days(7).num_seconds());

    let cookie = response.set_cookie().expect("cookie set");
    assert!(cookie.starts_with(&format!("token={token};")));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_with_email_ignores_case() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "username": "Alice@School.TEST", "password": PASSWORD }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "alice");
    assert_eq!(response.body["data"]["role"], "student");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;

    let wrong_password = app
        .post(
            "/api/auth/login",
            json!({ "username": "mrossi", "password": "not-it" }),
            None,
        )
        .await;
    let unknown_user = app
        .post(
            "/api/auth/login",
            json!({ "username": "ghost", "password": PASSWORD }),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert_eq!(wrong_password.body["code"], "UNAUTHORIZED");
    assert!(wrong_password.set_cookie().is_none());
}

#[tokio::test]
async fn test_login_missing_password_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post("/api/auth/login", json!({ "username": "mrossi" }), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_cookie_alone_authenticates() {
    let app = TestApp::new().await;
    let token = app.login("alice", PASSWORD).await;

    let response = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            None,
            Some(&format!("theme=dark; token={token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], app.school.alice);
    assert_eq!(response.body["data"]["first_name"], "Alice");
}

#[tokio::test]
async fn test_bearer_header_takes_precedence_over_cookie() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let student = app.token_for(app.school.alice).await;

    let response = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            Some(&principal),
            Some(&format!("token={student}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["role"], "principal");
}

#[tokio::test]
async fn test_missing_credentials_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/api/classes", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Authentication required");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    let identity = app.identity(app.school.principal).await;
    let expired = app
        .tokens
        .issue_with_ttl(&identity, Duration::seconds(-60))
        .expect("issue")
        .token;

    let response = app.get("/api/classes", Some(&expired)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_token_signed_with_other_key_rejected() {
    let app = TestApp::new().await;
    let identity = app.identity(app.school.principal).await;
    let foreign = TokenService::new(
        &SigningSecret {
            value: "some-other-secret".to_string(),
            is_fallback: false,
        },
        Duration::days(7),
    )
    .issue(&identity)
    .expect("issue")
    .token;

    let response = app.get("/api/classes", Some(&foreign)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/api/classes", Some("not.a.jwt")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_role_is_forbidden() {
    let app = TestApp::new().await;
    let now = Utc::now();
    let claims = Claims {
        id: app.school.principal,
        username: "principal".to_string(),
        email: "principal@school.test".to_string(),
        role: "janitor".to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("encode");

    let response = app.get("/api/classes", Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "Access denied");
}

#[tokio::test]
async fn test_teacher_without_profile_is_not_found() {
    let app = TestApp::new().await;
    let token = app.token_for(app.school.park).await;

    let me = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);

    let classes = app.get("/api/classes", Some(&token)).await;
    assert_eq!(classes.status, StatusCode::NOT_FOUND);
    assert_eq!(classes.body["error"], "Teacher profile not found");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;

    let response = app.post("/api/auth/logout", json!({}), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "Logged out successfully");
    let cookie = response.set_cookie().expect("cookie cleared");
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let response = app.get("/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}
