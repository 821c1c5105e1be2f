//! Calendar boundary arithmetic for baseline rollovers.
//!
//! All boundaries are computed against the server's local calendar; there
//! is no timezone negotiation with callers.

use chrono::{Datelike, Duration, NaiveDate};

/// Most recent Monday on or before `date` (the ISO week start).
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// First day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_is_its_own_week_start() {
        assert_eq!(start_of_week(date(2024, 3, 11)), date(2024, 3, 11));
    }

    #[test]
    fn test_sunday_maps_to_monday_six_days_prior() {
        assert_eq!(start_of_week(date(2024, 3, 17)), date(2024, 3, 11));
    }

    #[test]
    fn test_friday_maps_to_same_week_monday() {
        assert_eq!(start_of_week(date(2024, 3, 15)), date(2024, 3, 11));
    }

    #[test]
    fn test_week_start_crosses_month_boundary() {
        // Friday 2024-03-01 belongs to the week starting Monday 2024-02-26.
        assert_eq!(start_of_week(date(2024, 3, 1)), date(2024, 2, 26));
    }

    #[test]
    fn test_week_start_crosses_year_boundary() {
        // Wednesday 2025-01-01 belongs to the week starting Monday 2024-12-30.
        assert_eq!(start_of_week(date(2025, 1, 1)), date(2024, 12, 30));
    }

    #[test]
    fn test_month_start_mid_month() {
        assert_eq!(start_of_month(date(2024, 3, 15)), date(2024, 3, 1));
    }

    #[test]
    fn test_month_start_on_first() {
        assert_eq!(start_of_month(date(2024, 4, 1)), date(2024, 4, 1));
    }

    #[test]
    fn test_month_start_last_day_of_leap_february() {
        assert_eq!(start_of_month(date(2024, 2, 29)), date(2024, 2, 1));
    }
}
