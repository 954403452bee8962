//! Request-time authentication.
//!
//! - [`auth::AuthUser`] -- Extracts the account from the session cookie (API routes).
//! - [`guard::route_guard`] -- Redirects page requests per the route lists.

pub mod auth;
pub mod guard;
