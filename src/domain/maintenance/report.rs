//! Monthly request report
//!
//! Month arithmetic and gap-filling for the per-garage monthly report. The
//! store only hands over the scheduled dates; grouping happens here so the
//! logic does not depend on backend-specific date functions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};

/// A calendar month, stored as its first day.
///
/// Orders chronologically and formats as zero-padded `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub fn of(date: NaiveDate) -> Self {
        // Day 1 exists in every month.
        Self(date - chrono::Days::new(u64::from(date.day0())))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn next(&self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(Self)
    }

    /// Every month from `self` to `end`, both inclusive. Empty if `end` is
    /// before `self`.
    pub fn through(self, end: YearMonth) -> Vec<YearMonth> {
        std::iter::successors(Some(self), |m| m.next())
            .take_while(|m| *m <= end)
            .collect()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Returned when a string is not a `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid year-month `{0}`")]
pub struct ParseYearMonthError(String);

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(char::is_whitespace) {
            return Err(ParseYearMonthError(s.to_string()));
        }
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ParseYearMonthError(s.to_string()))
    }
}

/// One report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRequests {
    pub year_month: YearMonth,
    pub requests: u64,
}

/// Counts `dates` per month and returns one entry for every month from
/// `start` to `end`, with zero for months that have no dates. Dates outside
/// the range are ignored. The result is sorted by month.
pub fn monthly_counts<I>(start: YearMonth, end: YearMonth, dates: I) -> Vec<MonthlyRequests>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut grouped: BTreeMap<YearMonth, u64> = BTreeMap::new();
    for date in dates {
        *grouped.entry(YearMonth::of(date)).or_default() += 1;
    }

    start
        .through(end)
        .into_iter()
        .map(|year_month| MonthlyRequests {
            year_month,
            requests: grouped.get(&year_month).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_and_formats_zero_padded() {
        let m = ym("2024-03");
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 3);
        assert_eq!(m.to_string(), "2024-03");
    }

    #[test]
    fn rejects_malformed_months() {
        for bad in [
            "2024-13",
            "2024/01",
            "2024-02-15",
            "January",
            "",
            " 2024-01",
            "2024-01 ",
        ] {
            assert!(bad.parse::<YearMonth>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn last_day_handles_leap_february() {
        assert_eq!(ym("2024-02").last_day(), date(2024, 2, 29));
        assert_eq!(ym("2023-02").last_day(), date(2023, 2, 28));
        assert_eq!(ym("2023-12").last_day(), date(2023, 12, 31));
    }

    #[test]
    fn through_crosses_year_boundary() {
        let months: Vec<String> = ym("2023-11")
            .through(ym("2024-02"))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, ["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn through_is_empty_for_inverted_range() {
        assert!(ym("2024-05").through(ym("2024-04")).is_empty());
    }

    #[test]
    fn of_maps_any_day_to_its_month() {
        assert_eq!(YearMonth::of(date(2024, 2, 29)), ym("2024-02"));
        assert_eq!(YearMonth::of(date(2024, 1, 1)), ym("2024-01"));
    }

    #[test]
    fn monthly_counts_fills_gaps_with_zero() {
        let report = monthly_counts(
            ym("2024-01"),
            ym("2024-03"),
            [date(2024, 2, 1), date(2024, 2, 14), date(2024, 2, 29)],
        );

        let lines: Vec<(String, u64)> = report
            .iter()
            .map(|r| (r.year_month.to_string(), r.requests))
            .collect();
        assert_eq!(
            lines,
            [
                ("2024-01".to_string(), 0),
                ("2024-02".to_string(), 3),
                ("2024-03".to_string(), 0),
            ]
        );
    }

    #[test]
    fn monthly_counts_ignores_dates_outside_range() {
        let report = monthly_counts(ym("2024-01"), ym("2024-01"), [date(2023, 12, 31)]);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].requests, 0);
    }
}
