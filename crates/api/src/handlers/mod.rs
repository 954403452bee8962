//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `fintrack_db`, scope every query
//! by the session's account, and map errors via [`AppError`].

pub mod auth;
pub mod budget_items;
pub mod categories;
pub mod dashboard;
pub mod profile;
pub mod reports;
pub mod transactions;

use std::str::FromStr;

use fintrack_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Turn a core validation message into a `400`.
pub(crate) fn check(result: Result<(), String>) -> AppResult<()> {
    result.map_err(|msg| AppError::Core(CoreError::Validation(msg)))
}

/// Run `validator` rules on a request body.
pub(crate) fn validate_body<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// Parse an enum-valued field or filter, reporting unknown values as `400`.
pub(crate) fn parse_field<T>(raw: &str) -> AppResult<T>
where
    T: FromStr<Err = String>,
{
    raw.parse().map_err(|msg| AppError::Core(CoreError::Validation(msg)))
}

/// Like [`parse_field`] for optional query filters.
pub(crate) fn parse_filter<T>(raw: Option<&str>) -> AppResult<Option<T>>
where
    T: FromStr<Err = String>,
{
    raw.map(parse_field).transpose()
}
