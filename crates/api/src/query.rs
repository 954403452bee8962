//! Shared query parameter types for API handlers.
//!
//! Enum-valued filters arrive as raw strings and are parsed by the handlers
//! so an unknown value produces the standard JSON `400` body.

use serde::Deserialize;

/// `?type=income|expense` filter.
#[derive(Debug, Default, Deserialize)]
pub struct TypeFilter {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `?priority=most-crucial|less-crucial` filter.
#[derive(Debug, Default, Deserialize)]
pub struct PriorityFilter {
    pub priority: Option<String>,
}

/// Parameters for `GET /reports/monthly`.
#[derive(Debug, Default, Deserialize)]
pub struct MonthlyParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Number of months, clamped to `1..=24`; defaults to 6.
    pub months: Option<String>,
}
