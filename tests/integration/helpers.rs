//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use schoolhub_auth::{PasswordHasher, TokenService};
use schoolhub_core::config::AppConfig;
use schoolhub_database::DatabasePool;
use schoolhub_database::repositories::{
    ClassRepository, ProfileRepository, SubjectRepository, TimetableRepository, UserRepository,
};
use schoolhub_entity::user::{CreateUser, Identity, Role};

/// Signing secret shared by the app under test and locally minted tokens.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Password of every seeded account.
pub const PASSWORD: &str = "password123";

/// Identifiers of the seeded school.
///
/// Marco Rossi teaches Mathematics in 10A and Physics in 11A. June Lee
/// teaches History in 10B. Nina Park is a teacher account without a
/// teacher profile.
#[derive(Debug, Clone, Copy)]
pub struct School {
    pub principal: i64,
    pub rossi: i64,
    pub rossi_teacher: i64,
    pub lee: i64,
    pub park: i64,
    pub alice: i64,
    pub alice_student: i64,
    pub bob_student: i64,
    pub carol: i64,
    pub carol_student: i64,
    pub dan_student: i64,
    pub class_10a: i64,
    pub class_10b: i64,
    pub class_11a: i64,
    pub math: i64,
    pub physics: i64,
    pub history: i64,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub pool: SqlitePool,
    /// Token service keyed like the app's own
    pub tokens: TokenService,
    /// Seeded identifiers
    pub school: School,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.url = "sqlite::memory:".to_string();
        config.auth.jwt_secret = Some(TEST_SECRET.to_string());

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to open test database");
        schoolhub_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let pool = db.pool().clone();
        let hasher = PasswordHasher::new(&config.auth).expect("Failed to build hasher");
        let hash = hasher.hash(PASSWORD).expect("Failed to hash password");
        let school = seed(&pool, &hash).await;

        let secret = config
            .auth
            .signing_secret(&config.environment)
            .expect("Failed to resolve secret");
        let tokens = TokenService::new(&secret, config.auth.token_ttl());

        let state = schoolhub_api::build_state(config, db).expect("Failed to build state");
        let router = schoolhub_api::build_app(state);

        Self {
            router,
            pool,
            tokens,
            school,
        }
    }

    /// Mint a valid token for a seeded user.
    pub async fn token_for(&self, user_id: i64) -> String {
        let identity = self.identity(user_id).await;
        self.tokens
            .issue(&identity)
            .expect("Failed to issue token")
            .token
    }

    /// Load a seeded user's public identity.
    pub async fn identity(&self, user_id: i64) -> Identity {
        let (username, email, role, first_name, last_name): (String, String, Role, String, String) =
            sqlx::query_as(
                "SELECT username, email, role, first_name, last_name FROM users WHERE id = ?",
            )
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to load user");

        Identity {
            id: user_id,
            username,
            email,
            role,
            first_name,
            last_name,
        }
    }

    /// Login and return the token from the response body.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self.post("/api/auth/login", body, None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// GET with an optional bearer token.
    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request("GET", path, None, token, None).await
    }

    /// POST a JSON body with an optional bearer token.
    pub async fn post(&self, path: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request("POST", path, Some(body), token, None).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
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
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `Set-Cookie` header, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// Length of the array at `key`.
    pub fn len_of(&self, key: &str) -> usize {
        self.body[key]
            .as_array()
            .unwrap_or_else(|| panic!("`{key}` is not an array: {:?}", self.body))
            .len()
    }

    /// String values of `field` across the array at `key`.
    pub fn strings(&self, key: &str, field: &str) -> Vec<String> {
        self.body[key]
            .as_array()
            .unwrap_or_else(|| panic!("`{key}` is not an array: {:?}", self.body))
            .iter()
            .map(|item| item[field].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

struct Seeder {
    pool: SqlitePool,
    hash: String,
    users: UserRepository,
    profiles: ProfileRepository,
}

impl Seeder {
    async fn user(&self, username: &str, role: Role, first_name: &str, last_name: &str) -> i64 {
        self.users
            .create(&CreateUser {
                username: username.to_string(),
                email: format!("{username}@school.test"),
                password_hash: self.hash.clone(),
                role,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
            .await
            .expect("Failed to create user")
            .id
    }

    async fn teacher(&self, user_id: i64, qualification: &str) -> i64 {
        self.profiles
            .create_teacher(user_id, Some(qualification))
            .await
            .expect("Failed to create teacher profile")
            .id
    }

    async fn student(&self, user_id: i64, class_id: i64, roll_number: &str) -> i64 {
        self.profiles
            .create_student(user_id, class_id, Some(roll_number))
            .await
            .expect("Failed to create student profile")
            .id
    }

    async fn execute(&self, sql: &str) {
        sqlx::query(sql)
            .execute(&self.pool)
            .await
            .unwrap_or_else(|e| panic!("Seed statement failed ({sql}): {e}"));
    }
}

async fn seed(pool: &SqlitePool, hash: &str) -> School {
    let seeder = Seeder {
        pool: pool.clone(),
        hash: hash.to_string(),
        users: UserRepository::new(pool.clone()),
        profiles: ProfileRepository::new(pool.clone()),
    };
    let classes = ClassRepository::new(pool.clone());
    let subjects = SubjectRepository::new(pool.clone());
    let timetable = TimetableRepository::new(pool.clone());

    let class_10a = classes.create("10A", 10).await.expect("class").id;
    let class_10b = classes.create("10B", 10).await.expect("class").id;
    let class_11a = classes.create("11A", 11).await.expect("class").id;

    let math = subjects.create("Mathematics", "MATH").await.expect("subject").id;
    let physics = subjects.create("Physics", "PHY").await.expect("subject").id;
    let history = subjects.create("History", "HIST").await.expect("subject").id;

    let principal = seeder.user("principal", Role::Principal, "Paula", "Prince").await;
    let rossi = seeder.user("mrossi", Role::Teacher, "Marco", "Rossi").await;
    let lee = seeder.user("jlee", Role::Teacher, "June", "Lee").await;
    let park = seeder.user("npark", Role::Teacher, "Nina", "Park").await;
    let alice = seeder.user("alice", Role::Student, "Alice", "Adams").await;
    let bob = seeder.user("bob", Role::Student, "Bob", "Brown").await;
    let carol = seeder.user("carol", Role::Student, "Carol", "Clark").await;
    let dan = seeder.user("dan", Role::Student, "Dan", "Dunn").await;

    let rossi_teacher = seeder.teacher(rossi, "MSc Mathematics").await;
    let lee_teacher = seeder.teacher(lee, "BA History").await;

    let alice_student = seeder.student(alice, class_10a, "10A-01").await;
    let bob_student = seeder.student(bob, class_10a, "10A-02").await;
    let carol_student = seeder.student(carol, class_10b, "10B-01").await;
    let dan_student = seeder.student(dan, class_11a, "11A-01").await;

    for (teacher_id, subject_id, class_id) in [
        (rossi_teacher, math, class_10a),
        (rossi_teacher, physics, class_11a),
        (lee_teacher, history, class_10b),
    ] {
        seeder
            .profiles
            .assign(teacher_id, subject_id, class_id)
            .await
            .expect("Failed to assign teacher");
    }

    seeder
        .execute(&format!(
            "INSERT INTO results (student_id, subject_id, term, score, grade, recorded_by) VALUES \
             ({alice_student}, {math}, 'Term 1', 88, 'A', {rossi}), \
             ({alice_student}, {physics}, 'Term 1', 70, 'B', {principal}), \
             ({carol_student}, {history}, 'Term 1', 75, 'B', {lee}), \
             ({dan_student}, {physics}, 'Term 1', 64, 'C', {rossi})"
        ))
        .await;

    seeder
        .execute(&format!(
            "INSERT INTO attendance (student_id, date, status, recorded_by) VALUES \
             ({alice_student}, '2026-09-01', 'present', {rossi}), \
             ({carol_student}, '2026-09-01', 'absent', {lee})"
        ))
        .await;

    seeder
        .execute(&format!(
            "INSERT INTO announcements (title, content, target, class_id, created_by, created_at) VALUES \
             ('Welcome back', 'Term starts Monday.', 'all', NULL, {principal}, '2026-09-01 08:00:00'), \
             ('Staff meeting', 'Friday 3pm.', 'teacher', NULL, {principal}, '2026-09-02 08:00:00'), \
             ('Exam week', 'Revision timetable attached.', 'student', NULL, {principal}, '2026-09-03 08:00:00'), \
             ('10A field trip', 'Museum visit.', 'class', {class_10a}, {principal}, '2026-09-04 08:00:00'), \
             ('10B parents evening', 'Thursday 6pm.', 'class', {class_10b}, {principal}, '2026-09-05 08:00:00')"
        ))
        .await;

    for (class_id, subject_id, teacher_id, day, start, end) in [
        (class_10a, math, rossi_teacher, 1, "09:00", "09:45"),
        (class_11a, physics, rossi_teacher, 2, "10:00", "10:45"),
        (class_10b, history, lee_teacher, 3, "11:00", "11:45"),
    ] {
        timetable
            .create(class_id, subject_id, teacher_id, day, start, end)
            .await
            .expect("Failed to add timetable slot");
    }

    School {
        principal,
        rossi,
        rossi_teacher,
        lee,
        park,
        alice,
        alice_student,
        bob_student,
        carol,
        carol_student,
        dan_student,
        class_10a,
        class_10b,
        class_11a,
        math,
        physics,
        history,
    }
}
