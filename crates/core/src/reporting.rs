//! Calendar-month windows and series assembly for the monthly reports.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Default number of months in a monthly series.
pub const DEFAULT_MONTH_COUNT: u32 = 6;

/// Upper bound on months accepted from clients.
pub const MAX_MONTH_COUNT: u32 = 24;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthBucket {
    year: i32,
    /// 1-based, always within `1..=12`.
    month: u32,
}

impl MonthBucket {
    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month.
    pub fn start(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month bucket always holds a valid year/month")
    }

    /// First day of the following month.
    pub fn end_exclusive(self) -> NaiveDate {
        self.next().start()
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Chart label, e.g. `"Mar 2026"`.
    pub fn label(self) -> String {
        let idx = (self.month as usize).saturating_sub(1).min(11);
        format!("{} {}", MONTH_ABBREVIATIONS[idx], self.year)
    }
}

/// A labeled point in a monthly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub name: String,
    pub amount: f64,
}

/// The `count` months ending with the month containing `today`, oldest first.
pub fn month_window(today: NaiveDate, count: u32) -> Vec<MonthBucket> {
    let mut buckets = Vec::with_capacity(count as usize);
    let mut current = MonthBucket::containing(today);
    for _ in 0..count {
        buckets.push(current);
        current = current.previous();
    }
    buckets.reverse();
    buckets
}

/// Clamp a client-supplied month count into `1..=MAX_MONTH_COUNT`.
pub fn clamp_month_count(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_MONTH_COUNT)
        .clamp(1, MAX_MONTH_COUNT)
}

/// Lay per-month sums onto a window; months without a sum report zero.
///
/// `sums` holds `(year, month, total)` rows in any order. Rows outside the
/// window are ignored.
pub fn fill_series(window: &[MonthBucket], sums: &[(i32, u32, f64)]) -> Vec<MonthlyPoint> {
    window
        .iter()
        .map(|bucket| {
            let amount = sums
                .iter()
                .filter(|(y, m, _)| *y == bucket.year && *m == bucket.month)
                .map(|(_, _, total)| *total)
                .sum();
            MonthlyPoint {
                name: bucket.label(),
                amount,
            }
        })
        .collect()
}
