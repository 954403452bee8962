//! Domain types and pure logic for the finance tracker.
//!
//! Nothing in this crate performs IO; the `db` and `api` crates build on it.

pub mod categories;
pub mod error;
pub mod finance;
pub mod reporting;
pub mod routing;
pub mod types;
pub mod validation;
