//! Account entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use fintrack_core::types::{DbId, Timestamp};

/// Full account row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe account representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub avatar: Option<String>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new account. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
}
