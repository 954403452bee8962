//! Transaction and budget classification enums.
//!
//! Both are stored as lowercase text columns guarded by `CHECK` constraints,
//! so the string forms here must match the migration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether money came in or went out. Also the type of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!(
                "Invalid transaction type '{other}'. Must be one of: income, expense"
            )),
        }
    }
}

/// How essential a planned budget line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetPriority {
    MostCrucial,
    LessCrucial,
}

impl BudgetPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetPriority::MostCrucial => "most-crucial",
            BudgetPriority::LessCrucial => "less-crucial",
        }
    }
}

impl fmt::Display for BudgetPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "most-crucial" => Ok(BudgetPriority::MostCrucial),
            "less-crucial" => Ok(BudgetPriority::LessCrucial),
            other => Err(format!(
                "Invalid priority '{other}'. Must be one of: most-crucial, less-crucial"
            )),
        }
    }
}
