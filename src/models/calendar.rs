//! Calendar date model.
//!
//! A proper Gregorian date used for appointment days and dates of birth.
//! Construction validates month lengths and leap years, so a
//! `CalendarDate` in hand is always a real day.
//!
//! # Leap Years
//! A year is a leap year iff it is divisible by 4 and not by 100, or it is
//! divisible by 400.
//!
//! # Text Form
//! Parsed from `MM/DD/YYYY` (leading zeros optional), displayed as
//! `M/D/YYYY`.

use chrono::{Datelike, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

const QUADRENNIAL: i32 = 4;
const CENTENNIAL: i32 = 100;
const QUATERCENTENNIAL: i32 = 400;

/// An immutable, validated calendar date.
///
/// Ordered by (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    // Field order drives the derived ordering.
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a date, rejecting impossible (month, day, year) triples.
    pub fn new(month: u32, day: u32, year: i32) -> Result<Self, ModelError> {
        if !Self::is_valid(month, day, year) {
            return Err(ModelError::InvalidCalendarDate { month, day, year });
        }
        Ok(Self { year, month, day })
    }

    /// Whether `(month, day, year)` names a real calendar day.
    pub fn is_valid(month: u32, day: u32, year: i32) -> bool {
        match days_in_month(month, year) {
            Some(last) => (1..=last).contains(&day),
            None => false,
        }
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self::from_naive_date(Local::now().date_naive())
    }

    /// Converts from a chrono date (always valid).
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Converts to a chrono date.
    ///
    /// Returns `None` only for years outside chrono's supported range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Day of the week, if the year is within chrono's range.
    pub fn weekday(&self) -> Option<Weekday> {
        self.to_naive_date().map(|d| d.weekday())
    }

    /// Whether the date falls on Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Some(Weekday::Sat | Weekday::Sun))
    }

    /// Adds whole months, clamping the day to the target month's length.
    pub fn add_months(&self, months: u32) -> Option<Self> {
        self.to_naive_date()
            .and_then(|d| d.checked_add_months(Months::new(months)))
            .map(Self::from_naive_date)
    }
}

/// Whether `year` is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % QUADRENNIAL == 0 && year % CENTENNIAL != 0) || year % QUATERCENTENNIAL == 0
}

/// Number of days in `month` of `year`, or `None` for a month outside 1–12.
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ModelError::MalformedDate(s.to_string());
        let mut parts = s.trim().split('/');
        let (Some(m), Some(d), Some(y), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let month: u32 = m.trim().parse().map_err(|_| malformed())?;
        let day: u32 = d.trim().parse().map_err(|_| malformed())?;
        let year: i32 = y.trim().parse().map_err(|_| malformed())?;
        Self::new(month, day, year)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert!(CalendarDate::is_valid(10, 15, 2023));
        assert!(CalendarDate::is_valid(2, 29, 2020)); // leap year
        assert!(CalendarDate::is_valid(2, 29, 2000)); // divisible by 400
        assert!(CalendarDate::is_valid(12, 31, 2024));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!CalendarDate::is_valid(13, 15, 2023));
        assert!(!CalendarDate::is_valid(0, 15, 2023));
        assert!(!CalendarDate::is_valid(2, 30, 2023));
        assert!(!CalendarDate::is_valid(4, 31, 2023));
        assert!(!CalendarDate::is_valid(2, 29, 2021));
        assert!(!CalendarDate::is_valid(2, 29, 1900)); // divisible by 100
        assert!(!CalendarDate::is_valid(1, 0, 2023));
    }

    #[test]
    fn test_month_lengths_cover_every_day() {
        for year in [2020, 2021, 1900, 2000] {
            for month in 1..=12 {
                let last = days_in_month(month, year).unwrap();
                for day in 1..=last {
                    assert!(CalendarDate::is_valid(month, day, year));
                }
                assert!(!CalendarDate::is_valid(month, last + 1, year));
            }
        }
    }

    #[test]
    fn test_new_rejects_impossible_date() {
        let err = CalendarDate::new(2, 30, 2024).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidCalendarDate {
                month: 2,
                day: 30,
                year: 2024
            }
        );
    }

    #[test]
    fn test_parse_and_display() {
        let d: CalendarDate = "02/09/2025".parse().unwrap();
        assert_eq!((d.month(), d.day(), d.year()), (2, 9, 2025));
        assert_eq!(d.to_string(), "2/9/2025");

        assert!("2/30/2025".parse::<CalendarDate>().is_err());
        assert!("2-9-2025".parse::<CalendarDate>().is_err());
        assert!("2/9".parse::<CalendarDate>().is_err());
        assert!("2/9/2025/1".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_ordering() {
        let a = CalendarDate::new(12, 31, 2023).unwrap();
        let b = CalendarDate::new(1, 1, 2024).unwrap();
        let c = CalendarDate::new(1, 2, 2024).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b, CalendarDate::new(1, 1, 2024).unwrap());
    }

    #[test]
    fn test_weekend() {
        // 2024-11-02 is a Saturday
        assert!(CalendarDate::new(11, 2, 2024).unwrap().is_weekend());
        assert!(CalendarDate::new(11, 3, 2024).unwrap().is_weekend());
        assert!(!CalendarDate::new(11, 4, 2024).unwrap().is_weekend());
    }

    #[test]
    fn test_add_months_clamps() {
        let d = CalendarDate::new(8, 31, 2024).unwrap();
        assert_eq!(d.add_months(6), Some(CalendarDate::new(2, 28, 2025).unwrap()));
    }

    #[test]
    fn test_serde_uses_text_form() {
        let d = CalendarDate::new(3, 7, 2024).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"3/7/2024\"");
        assert!(serde_json::from_str::<CalendarDate>("\"2/30/2024\"").is_err());
    }
}
