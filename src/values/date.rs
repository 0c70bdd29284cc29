//! Validated calendar date value

use crate::error::{DcatError, DcatResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// An ISO calendar date (`YYYY-MM-DD`)
///
/// Keeps the text exactly as given so it is emitted unchanged as an
/// `xsd:date` literal. Ordering follows the parsed calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    text: String,
    date: NaiveDate,
}

impl Date {
    /// Parse and validate a date string
    pub fn new(value: impl Into<String>) -> DcatResult<Self> {
        let text = value.into();
        match NaiveDate::parse_from_str(&text, DATE_FORMAT) {
            Ok(date) => Ok(Self { text, date }),
            Err(e) => Err(DcatError::InvalidDate {
                message: format!("String is not a valid date: {}", e),
                value: text,
            }),
        }
    }

    /// The date as originally written
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed calendar date
    pub fn naive(&self) -> NaiveDate {
        self.date
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for Date {}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Date {
    type Err = DcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Date {
    type Error = DcatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Date {
    type Error = DcatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let d = Date::new("2020-03-13").unwrap();
        assert_eq!(d.as_str(), "2020-03-13");
        assert_eq!(d.naive(), NaiveDate::from_ymd_opt(2020, 3, 13).unwrap());
    }

    #[test]
    fn test_not_a_calendar_date() {
        for bad in ["2020-02-30", "2019-13-01", "not a date", "13.03.2020", ""] {
            match Date::new(bad) {
                Err(DcatError::InvalidDate { value, .. }) => assert_eq!(value, bad),
                other => panic!("expected InvalidDate for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_leap_day() {
        assert!(Date::new("2020-02-29").is_ok());
        assert!(Date::new("2019-02-29").is_err());
    }

    #[test]
    fn test_ordering_is_calendar_order() {
        let a = Date::new("2020-04-06").unwrap();
        let b = Date::new("2020-04-07").unwrap();
        assert!(a < b);
        assert_eq!(a, Date::new("2020-04-06").unwrap());
    }
}
