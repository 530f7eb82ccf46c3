//! Translation of sqlx failures into application errors.

use schoolhub_core::error::{AppError, ErrorKind};

/// Build a mapper from `sqlx::Error` to [`AppError`] for the given operation.
///
/// Constraint violations caused by caller input are surfaced as client errors:
/// a dangling reference is `NotFound`, a duplicate key is `Validation`.
/// Everything else is a `Database` error carrying the original cause.
pub fn map_sqlx(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return AppError::not_found(format!("{context}: referenced record does not exist"));
            }
            if db_err.is_unique_violation() {
                return AppError::validation(format!("{context}: record already exists"));
            }
        }
        AppError::with_source(ErrorKind::Database, context, err)
    }
}
