//! The `session` cookie: the transport for the signed session token.
//!
//! Cookies are read and written through [`tower_cookies::Cookies`], which
//! requires `CookieManagerLayer` on the router.

use fintrack_db::models::user::UserResponse;
use time::{Duration, OffsetDateTime};
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use crate::auth::jwt::{issue_token, verify_token, SessionClaims};
use crate::config::SessionConfig;

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE: &str = "session";

/// Failure to start a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session lifetime of {0} days overflows the clock")]
    ExpiryOutOfRange(i64),

    #[error("Token generation error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// `now + ttl_days`, or `None` when that is not representable.
pub fn session_expiry(now: OffsetDateTime, ttl_days: i64) -> Option<OffsetDateTime> {
    let ttl_secs = ttl_days.checked_mul(Duration::DAY.whole_seconds())?;
    now.checked_add(Duration::seconds(ttl_secs))
}

/// Build the session cookie for `token`, expiring at `expires`.
pub fn build_session_cookie(
    token: String,
    expires: OffsetDateTime,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .expires(expires)
        .build()
}

/// Issue a token for `account` and set it as the session cookie.
pub fn create_session(
    cookies: &Cookies,
    account: &UserResponse,
    config: &SessionConfig,
) -> Result<SessionClaims, SessionError> {
    let now = OffsetDateTime::now_utc();
    let expires = session_expiry(now, config.ttl_days)
        .ok_or(SessionError::ExpiryOutOfRange(config.ttl_days))?;

    let claims = SessionClaims::new(
        account.id,
        account.email.as_str(),
        account.full_name.as_str(),
        now.unix_timestamp(),
        (expires - now).whole_seconds(),
    );
    let token = issue_token(&claims, &config.secret)?;

    cookies.add(build_session_cookie(token, expires, config.secure_cookies));
    tracing::debug!(user_id = account.id, "Session created");
    Ok(claims)
}

/// Decode the session cookie, if any. Invalid tokens read as no session.
pub fn read_session(cookies: &Cookies, config: &SessionConfig) -> Option<SessionClaims> {
    let cookie = cookies.get(SESSION_COOKIE)?;
    verify_token(Some(cookie.value()), &config.secret)
}

/// Re-set the current token with a renewed cookie expiry.
///
/// The token is not re-signed. Returns the claims when a valid session was
/// present, `None` (and no cookie change) otherwise.
pub fn refresh_session(cookies: &Cookies, config: &SessionConfig) -> Option<SessionClaims> {
    let token = cookies.get(SESSION_COOKIE)?.value().to_string();
    let claims = verify_token(Some(&token), &config.secret)?;

    let Some(expires) = session_expiry(OffsetDateTime::now_utc(), config.ttl_days) else {
        tracing::warn!(ttl_days = config.ttl_days, "Session lifetime out of range");
        return None;
    };
    cookies.add(build_session_cookie(token, expires, config.secure_cookies));
    Some(claims)
}

/// Remove the session cookie. Safe to call without a session.
pub fn destroy_session(cookies: &Cookies) {
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
}
