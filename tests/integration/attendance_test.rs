//! Integration tests for bulk attendance writes.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn count_on(app: &TestApp, student_id: i64, date: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE student_id = ? AND date = ?")
        .bind(student_id)
        .bind(date)
        .fetch_one(&app.pool)
        .await
        .expect("count")
}

#[tokio::test]
async fn test_bulk_counts_inserts_and_updates() {
    let app = TestApp::new().await;
    let teacher = app.token_for(app.school.rossi).await;
    let s = app.school;

    let response = app
        .post(
            "/api/attendance",
            json!({
                "records": [
                    { "student_id": s.alice_student, "date": "2026-09-01", "status": "late", "remarks": "Bus delay" },
                    { "student_id": s.bob_student, "date": "2026-09-01", "status": "present" },
                    { "student_id": s.alice_student, "date": "2026-09-02", "status": "present" },
                ]
            }),
            Some(&teacher),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["inserted"], 2);
    assert_eq!(response.body["data"]["updated"], 1);

    let (status, remarks, recorded_by): (String, Option<String>, i64) = sqlx::query_as(
        "SELECT status, remarks, recorded_by FROM attendance WHERE student_id = ? AND date = ?",
    )
    .bind(s.alice_student)
    .bind("2026-09-01")
    .fetch_one(&app.pool)
    .await
    .expect("updated row");
    assert_eq!(status, "late");
    assert_eq!(remarks.as_deref(), Some("Bus delay"));
    assert_eq!(recorded_by, s.rossi);
    assert_eq!(count_on(&app, s.alice_student, "2026-09-01").await, 1);

    let statuses: Vec<(i64, String, String)> = sqlx::query_as(
        "SELECT student_id, date, status FROM attendance \
         WHERE recorded_by = ? ORDER BY date, student_id",
    )
    .bind(s.rossi)
    .fetch_all(&app.pool)
    .await
    .expect("rows");
    let mut expected = vec![
        (s.alice_student, "2026-09-01".to_string(), "late".to_string()),
        (s.bob_student, "2026-09-01".to_string(), "present".to_string()),
        (s.alice_student, "2026-09-02".to_string(), "present".to_string()),
    ];
    expected.sort_by(|a, b| (&a.1, a.0).cmp(&(&b.1, b.0)));
    assert_eq!(statuses, expected);
}

#[tokio::test]
async fn test_out_of_scope_student_rolls_back_batch() {
    let app = TestApp::new().await;
    let teacher = app.token_for(app.school.rossi).await;
    let s = app.school;

    let response = app
        .post(
            "/api/attendance",
            json!({
                "records": [
                    { "student_id": s.bob_student, "date": "2026-09-03", "status": "present" },
                    { "student_id": s.carol_student, "date": "2026-09-03", "status": "absent" },
                ]
            }),
            Some(&teacher),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(count_on(&app, s.bob_student, "2026-09-03").await, 0);
    assert_eq!(count_on(&app, s.carol_student, "2026-09-03").await, 0);
}

#[tokio::test]
async fn test_unknown_student_rolls_back_batch() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let s = app.school;

    let response = app
        .post(
            "/api/attendance",
            json!({
                "records": [
                    { "student_id": s.alice_student, "date": "2026-09-01", "status": "excused" },
                    { "student_id": s.bob_student, "date": "2026-09-04", "status": "present" },
                    { "student_id": 9999, "date": "2026-09-04", "status": "present" },
                ]
            }),
            Some(&principal),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(count_on(&app, s.bob_student, "2026-09-04").await, 0);

    let status: String = sqlx::query_scalar(
        "SELECT status FROM attendance WHERE student_id = ? AND date = '2026-09-01'",
    )
    .bind(s.alice_student)
    .fetch_one(&app.pool)
    .await
    .expect("original row");
    assert_eq!(status, "present");
}

#[tokio::test]
async fn test_principal_writes_any_class() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let s = app.school;

    let response = app
        .post(
            "/api/attendance",
            json!({
                "records": [
                    { "student_id": s.carol_student, "date": "2026-09-02", "status": "present" },
                    { "student_id": s.dan_student, "date": "2026-09-02", "status": "absent" },
                ]
            }),
            Some(&principal),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["inserted"], 2);
    assert_eq!(response.body["data"]["updated"], 0);
}

#[tokio::test]
async fn test_student_cannot_record_attendance() {
    let app = TestApp::new().await;
    let student = app.token_for(app.school.alice).await;

    let response = app
        .post(
            "/api/attendance",
            json!({
                "records": [
                    { "student_id": app.school.alice_student, "date": "2026-09-05", "status": "present" },
                ]
            }),
            Some(&student),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["error"],
        "Only teachers and principals can perform this action"
    );
    assert_eq!(count_on(&app, app.school.alice_student, "2026-09-05").await, 0);
}

#[tokio::test]
async fn test_invalid_batches_are_rejected() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;

    let empty = app
        .post("/api/attendance", json!({ "records": [] }), Some(&principal))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let bad_status = app
        .post(
            "/api/attendance",
            json!({
                "records": [
                    { "student_id": app.school.bob_student, "date": "2026-09-05", "status": "asleep" },
                ]
            }),
            Some(&principal),
        )
        .await;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_status.body["code"], "VALIDATION_ERROR");
}
