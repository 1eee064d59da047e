//! Financial year and fiscal month ordering
//!
//! An Indian financial year runs April through March, so display and
//! iteration order differs from plain calendar order: month 4 comes first
//! and months 1-3 fall in the following calendar year.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TargetError, TargetResult};

/// Calendar month numbers in fiscal display order: April through March.
pub const FISCAL_MONTH_ORDER: [u32; 12] = [4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3];

/// The fixed 12-month fiscal iteration sequence `[4..=12, 1..=3]`
pub fn ordered_fiscal_months() -> [u32; 12] {
    FISCAL_MONTH_ORDER
}

/// Check that a month number is a valid calendar month (1-12)
pub fn is_calendar_month(month: u32) -> bool {
    (1..=12).contains(&month)
}

/// English name of a calendar month, for display
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// A financial year identified by its starting calendar year
///
/// `FinancialYear::new(2024)` is the period April 2024 through March 2025,
/// displayed as "2024-25".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialYear(i32);

impl FinancialYear {
    /// Create a financial year starting in April of `start`
    pub const fn new(start: i32) -> Self {
        Self(start)
    }

    /// The calendar year the financial year starts in
    pub const fn start(&self) -> i32 {
        self.0
    }

    /// The calendar year the financial year ends in (March)
    pub const fn end(&self) -> i32 {
        self.0 + 1
    }

    /// Resolve the calendar year a fiscal month falls in.
    ///
    /// Months 4-12 belong to the starting year, months 1-3 to the next.
    pub const fn calendar_year(&self, month: u32) -> i32 {
        if month >= 4 {
            self.0
        } else {
            self.0 + 1
        }
    }

    /// The following financial year
    pub const fn succ(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The preceding financial year
    pub const fn pred(&self) -> Self {
        Self(self.0 - 1)
    }

    /// Parse a financial year from "2024" or "2024-25" style input
    pub fn parse(s: &str) -> TargetResult<Self> {
        let start = s.split('-').next().unwrap_or(s).trim();
        start
            .parse::<i32>()
            .map(Self)
            .map_err(|_| TargetError::Parse(format!("Invalid financial year: {}", s)))
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiscal_order_is_a_permutation_of_months() {
        let mut months: Vec<u32> = ordered_fiscal_months().to_vec();
        assert_eq!(months.len(), 12);
        months.sort_unstable();
        assert_eq!(months, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_fiscal_order_starts_in_april_ends_in_march() {
        let order = ordered_fiscal_months();
        assert_eq!(order[0], 4);
        assert_eq!(order[8], 12);
        assert_eq!(order[9], 1);
        assert_eq!(order[11], 3);
    }

    #[test]
    fn test_calendar_year_resolution() {
        let fy = FinancialYear::new(2024);
        for m in 4..=12 {
            assert_eq!(fy.calendar_year(m), 2024, "month {}", m);
        }
        for m in 1..=3 {
            assert_eq!(fy.calendar_year(m), 2025, "month {}", m);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FinancialYear::new(2024).to_string(), "2024-25");
        assert_eq!(FinancialYear::new(1999).to_string(), "1999-00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(FinancialYear::parse("2024").unwrap(), FinancialYear::new(2024));
        assert_eq!(FinancialYear::parse("2024-25").unwrap(), FinancialYear::new(2024));
        assert!(FinancialYear::parse("april").is_err());
    }

    #[test]
    fn test_navigation() {
        let fy = FinancialYear::new(2024);
        assert_eq!(fy.succ().start(), 2025);
        assert_eq!(fy.pred().start(), 2023);
    }

    #[test]
    fn test_month_helpers() {
        assert!(is_calendar_month(1));
        assert!(is_calendar_month(12));
        assert!(!is_calendar_month(0));
        assert!(!is_calendar_month(13));
        assert_eq!(month_name(4), "April");
        assert_eq!(month_name(99), "Unknown");
    }
}
