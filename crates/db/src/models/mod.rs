//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO where the entity supports edits

pub mod budget_item;
pub mod category;
pub mod report;
pub mod transaction;
pub mod user;
