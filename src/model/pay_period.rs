use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::PaycheckError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const SEPARATOR: &str = " to ";

/// Date range an earnings record covers, stored as `"2024-01-01 to 2024-01-14"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PaycheckError> {
        if end < start {
            return Err(PaycheckError::validation(
                "Pay period end date is before its start date",
            ));
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start.format(DATE_FORMAT),
            SEPARATOR,
            self.end.format(DATE_FORMAT)
        )
    }
}

impl FromStr for PayPeriod {
    type Err = PaycheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaycheckError::validation(format!("Invalid pay period: {s:?}"));

        let (start, end) = s.trim().split_once(SEPARATOR).ok_or_else(invalid)?;
        let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT).map_err(|_| invalid())?;
        let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT).map_err(|_| invalid())?;

        PayPeriod::new(start, end)
    }
}
