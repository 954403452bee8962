//! Credential verification: register, authenticate, change password.
//!
//! Every operation returns the account as a [`UserResponse`]; the stored
//! hash never leaves this module.

use fintrack_core::types::DbId;
use fintrack_db::models::user::{CreateUser, UserResponse};
use fintrack_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_against_dummy, verify_password};

/// Failures reported by the credential verifier.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    DuplicateAccount,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// Create an account with a freshly hashed password.
///
/// Emails are compared exactly; callers trim surrounding whitespace first.
pub async fn register(
    pool: &PgPool,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<UserResponse, AuthError> {
    if UserRepo::find_by_email(pool, email).await?.is_some() {
        return Err(AuthError::DuplicateAccount);
    }

    let password_hash = hash_password(password).map_err(|e| AuthError::Hashing(e.to_string()))?;

    let input = CreateUser {
        email: email.to_string(),
        full_name: full_name.to_string(),
        password_hash,
    };

    match UserRepo::create(pool, &input).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "Account registered");
            Ok(user.into())
        }
        // Lost a race with a concurrent signup for the same email.
        Err(err) if is_email_conflict(&err) => Err(AuthError::DuplicateAccount),
        Err(err) => Err(err.into()),
    }
}

/// Check an email/password pair.
///
/// Unknown emails still pay for one Argon2 verification so timing does not
/// reveal whether an account exists.
pub async fn authenticate(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<UserResponse, AuthError> {
    let Some(user) = UserRepo::find_by_email(pool, email).await? else {
        verify_against_dummy(password);
        return Err(AuthError::InvalidCredentials);
    };

    if !check_password(password, &user.password_hash, user.id) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user.into())
}

/// Replace an account's password after verifying the current one.
pub async fn change_password(
    pool: &PgPool,
    user_id: DbId,
    current: &str,
    new: &str,
) -> Result<(), AuthError> {
    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !check_password(current, &user.password_hash, user.id) {
        return Err(AuthError::InvalidCredentials);
    }

    let password_hash = hash_password(new).map_err(|e| AuthError::Hashing(e.to_string()))?;
    if !UserRepo::update_password(pool, user_id, &password_hash).await? {
        return Err(AuthError::InvalidCredentials);
    }

    tracing::info!(user_id, "Password changed");
    Ok(())
}

/// Verify against a stored hash; a corrupt hash counts as a mismatch.
fn check_password(password: &str, hash: &str, user_id: DbId) -> bool {
    verify_password(password, hash).unwrap_or_else(|e| {
        tracing::error!(user_id, error = %e, "Stored password hash is malformed");
        false
    })
}

fn is_email_conflict(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.code().as_deref() == Some("23505"))
}
