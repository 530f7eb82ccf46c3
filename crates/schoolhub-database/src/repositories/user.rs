//! User repository implementation.

use sqlx::SqlitePool;

use schoolhub_core::result::AppResult;
use schoolhub_entity::user::{CreateUser, UserAccount};

use crate::error::map_sqlx;

const USER_COLUMNS: &str =
    "id, username, email, password_hash, role, first_name, last_name, created_at";

/// Repository for user account lookups and creation.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<UserAccount>> {
        sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx("Failed to find user by id"))
    }

    /// Find a user by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>> {
        sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(username) = LOWER(?)"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx("Failed to find user by username"))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER(?)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx("Failed to find user by email"))
    }

    /// Insert a new user account.
    pub async fn create(&self, data: &CreateUser) -> AppResult<UserAccount> {
        sqlx::query_as::<_, UserAccount>(&format!(
            "INSERT INTO users (username, email, password_hash, role, first_name, last_name) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        ))
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("Failed to create user"))
    }
}
