//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every query on an owned
//! entity is scoped by `user_id`.

pub mod budget_item_repo;
pub mod category_repo;
pub mod report_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use budget_item_repo::BudgetItemRepo;
pub use category_repo::CategoryRepo;
pub use report_repo::ReportRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
