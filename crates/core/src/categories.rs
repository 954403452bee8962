//! Default category set and the color palette used for new categories.

use rand::seq::IndexedRandom;

use crate::finance::TransactionType;

/// A category every new account starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub category_type: TransactionType,
    pub color: &'static str,
}

const fn income(name: &'static str, color: &'static str) -> DefaultCategory {
    DefaultCategory {
        name,
        category_type: TransactionType::Income,
        color,
    }
}

const fn expense(name: &'static str, color: &'static str) -> DefaultCategory {
    DefaultCategory {
        name,
        category_type: TransactionType::Expense,
        color,
    }
}

/// Seeded at signup, only when the account has no categories yet.
pub const DEFAULT_CATEGORIES: &[DefaultCategory] = &[
    income("Salary", "#4CAF50"),
    income("Freelance", "#2196F3"),
    income("Investments", "#9C27B0"),
    income("Other Income", "#FF9800"),
    expense("Food", "#F44336"),
    expense("Transport", "#3F51B5"),
    expense("Housing", "#009688"),
    expense("Entertainment", "#FF5722"),
    expense("Utilities", "#795548"),
    expense("Shopping", "#E91E63"),
    expense("Other Expense", "#607D8B"),
];

/// Colors handed out to categories created without an explicit color.
pub const PALETTE: &[&str] = &[
    "#4CAF50", "#2196F3", "#9C27B0", "#FF9800", "#F44336", "#3F51B5", "#009688", "#FF5722",
    "#795548", "#E91E63", "#607D8B", "#673AB7", "#FFC107", "#00BCD4", "#8BC34A",
];

/// Pick a palette color at random.
pub fn random_color() -> &'static str {
    PALETTE.choose(&mut rand::rng()).copied().unwrap_or("#607D8B")
}
