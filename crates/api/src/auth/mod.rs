//! Authentication primitives.
//!
//! - [`jwt`] -- signed session token issue and verification.
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`credentials`] -- register / authenticate / change password.
//! - [`session`] -- the `session` cookie that carries the token.

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod session;
