//! Integration tests for role-scoped reads.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_classes_by_role() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let teacher = app.token_for(app.school.rossi).await;
    let student = app.token_for(app.school.alice).await;

    let all = app.get("/api/classes", Some(&principal)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.strings("classes", "name"), ["10A", "10B", "11A"]);

    let taught = app.get("/api/classes", Some(&teacher)).await;
    assert_eq!(taught.strings("classes", "name"), ["10A", "11A"]);

    let own = app.get("/api/classes", Some(&student)).await;
    assert_eq!(own.strings("classes", "name"), ["10A"]);
}

#[tokio::test]
async fn test_students_by_role() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let teacher = app.token_for(app.school.rossi).await;

    let all = app.get("/api/students", Some(&principal)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.len_of("students"), 4);

    let path = format!("/api/students?class_id={}", app.school.class_10b);
    let narrowed = app.get(&path, Some(&principal)).await;
    assert_eq!(narrowed.strings("students", "first_name"), ["Carol"]);

    let taught = app.get("/api/students", Some(&teacher)).await;
    assert_eq!(
        taught.strings("students", "first_name"),
        ["Alice", "Bob", "Dan"]
    );
}

#[tokio::test]
async fn test_teacher_filter_outside_scope_is_empty() {
    let app = TestApp::new().await;
    let teacher = app.token_for(app.school.rossi).await;

    let path = format!("/api/students?class_id={}", app.school.class_10b);
    let students = app.get(&path, Some(&teacher)).await;
    assert_eq!(students.status, StatusCode::OK);
    assert_eq!(students.len_of("students"), 0);

    let path = format!("/api/results?class_id={}", app.school.class_10b);
    let results = app.get(&path, Some(&teacher)).await;
    assert_eq!(results.status, StatusCode::OK);
    assert_eq!(results.len_of("results"), 0);
}

#[tokio::test]
async fn test_student_sees_only_self() {
    let app = TestApp::new().await;
    let student = app.token_for(app.school.alice).await;

    let path = format!("/api/students?class_id={}", app.school.class_10b);
    let response = app.get(&path, Some(&student)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.len_of("students"), 1);
    assert_eq!(response.body["students"][0]["id"], app.school.alice_student);
    assert_eq!(response.body["students"][0]["class_name"], "10A");
}

#[tokio::test]
async fn test_subject_catalogue_by_role() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let teacher = app.token_for(app.school.rossi).await;
    let student = app.token_for(app.school.alice).await;

    let all = app.get("/api/subjects", Some(&principal)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.len_of("subjects"), 3);

    let taught = app.get("/api/subjects", Some(&teacher)).await;
    assert_eq!(taught.strings("subjects", "code"), ["MATH", "PHY"]);

    let denied = app.get("/api/subjects", Some(&student)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_taught_subjects_are_teacher_only() {
    let app = TestApp::new().await;
    let teacher = app.token_for(app.school.lee).await;
    let principal = app.token_for(app.school.principal).await;

    let own = app.get("/api/teacher/subjects", Some(&teacher)).await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.strings("subjects", "name"), ["History"]);

    let denied = app.get("/api/teacher/subjects", Some(&principal)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_results_follow_assignment_pairs() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let teacher = app.token_for(app.school.rossi).await;

    let all = app.get("/api/results", Some(&principal)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.len_of("results"), 4);

    // Rossi teaches Physics only in 11A, so Alice's Physics mark stays hidden.
    let taught = app.get("/api/results", Some(&teacher)).await;
    assert_eq!(taught.len_of("results"), 2);
    let pairs: Vec<(i64, String)> = taught.body["results"]
        .as_array()
        .expect("results")
        .iter()
        .map(|r| {
            (
                r["student_id"].as_i64().unwrap_or_default(),
                r["subject_name"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    assert!(pairs.contains(&(app.school.alice_student, "Mathematics".to_string())));
    assert!(pairs.contains(&(app.school.dan_student, "Physics".to_string())));

    let path = format!("/api/results?subject_id={}", app.school.math);
    let math = app.get(&path, Some(&teacher)).await;
    assert_eq!(math.len_of("results"), 1);
}

#[tokio::test]
async fn test_student_results_ignore_filters() {
    let app = TestApp::new().await;
    let student = app.token_for(app.school.alice).await;

    let path = format!("/api/results?student_id={}", app.school.carol_student);
    let response = app.get(&path, Some(&student)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.len_of("results"), 2);
    for result in response.body["results"].as_array().expect("results") {
        assert_eq!(result["student_id"], app.school.alice_student);
    }
}

#[tokio::test]
async fn test_announcements_by_audience() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let teacher = app.token_for(app.school.rossi).await;
    let alice = app.token_for(app.school.alice).await;
    let carol = app.token_for(app.school.carol).await;

    let all = app.get("/api/announcements", Some(&principal)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.len_of("announcements"), 5);
    assert_eq!(all.body["announcements"][0]["title"], "10B parents evening");
    assert_eq!(all.body["announcements"][0]["author_name"], "Paula Prince");

    let for_teacher = app.get("/api/announcements", Some(&teacher)).await;
    assert_eq!(
        for_teacher.strings("announcements", "title"),
        ["10A field trip", "Staff meeting", "Welcome back"]
    );

    let for_alice = app.get("/api/announcements", Some(&alice)).await;
    assert_eq!(
        for_alice.strings("announcements", "title"),
        ["10A field trip", "Exam week", "Welcome back"]
    );

    let for_carol = app.get("/api/announcements", Some(&carol)).await;
    assert_eq!(
        for_carol.strings("announcements", "title"),
        ["10B parents evening", "Exam week", "Welcome back"]
    );
}

#[tokio::test]
async fn test_attendance_by_role() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let teacher = app.token_for(app.school.rossi).await;
    let carol = app.token_for(app.school.carol).await;

    let all = app.get("/api/attendance", Some(&principal)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.len_of("attendance"), 2);

    let taught = app.get("/api/attendance", Some(&teacher)).await;
    assert_eq!(taught.strings("attendance", "first_name"), ["Alice"]);

    let own = app.get("/api/attendance?date=2026-09-01", Some(&carol)).await;
    assert_eq!(own.strings("attendance", "status"), ["absent"]);

    let other_day = app.get("/api/attendance?date=2026-09-02", Some(&carol)).await;
    assert_eq!(other_day.len_of("attendance"), 0);
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;

    let response = app.get("/api/attendance?date=yesterday", Some(&principal)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_timetable_by_role() {
    let app = TestApp::new().await;
    let principal = app.token_for(app.school.principal).await;
    let teacher = app.token_for(app.school.rossi).await;
    let student = app.token_for(app.school.alice).await;

    let all = app.get("/api/timetable", Some(&principal)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.len_of("timetable"), 3);

    let path = format!("/api/timetable?class_id={}", app.school.class_11a);
    let one_class = app.get(&path, Some(&principal)).await;
    assert_eq!(one_class.strings("timetable", "subject_name"), ["Physics"]);

    let taught = app.get("/api/timetable", Some(&teacher)).await;
    assert_eq!(
        taught.strings("timetable", "subject_name"),
        ["Mathematics", "Physics"]
    );

    let own = app.get("/api/timetable", Some(&student)).await;
    assert_eq!(own.strings("timetable", "class_name"), ["10A"]);
    assert_eq!(own.body["timetable"][0]["start_time"], "09:00");
}
