//! Date ranges as written in entry dates.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A year with an optional month.
///
/// Parses the two forms entries are written in: `"2023"` and `"08/2020"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: u16,
    pub month: Option<u8>,
}

/// The end of a date range: a concrete date or an ongoing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    Date(YearMonth),
    Present,
}

/// Errors that can occur when parsing a date token.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DateError {
    #[error("expected \"YYYY\" or \"MM/YYYY\", got \"{0}\"")]
    Malformed(String),

    #[error("month out of range in \"{0}\"")]
    MonthOutOfRange(String),
}

impl FromStr for YearMonth {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        let s = s.trim();

        let (month, year) = match s.split_once('/') {
            Some((m, y)) => (Some(m), y),
            None => (None, s),
        };

        let year: u16 = year
            .parse()
            .map_err(|_| DateError::Malformed(s.to_string()))?;
        if !(1000..=9999).contains(&year) {
            return Err(DateError::Malformed(s.to_string()));
        }

        let month = match month {
            Some(m) => {
                let m: u8 = m.parse().map_err(|_| DateError::Malformed(s.to_string()))?;
                if !(1..=12).contains(&m) {
                    return Err(DateError::MonthOutOfRange(s.to_string()));
                }
                Some(m)
            }
            None => None,
        };

        Ok(YearMonth { year, month })
    }
}

impl FromStr for RangeEnd {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        if s.trim().eq_ignore_ascii_case("present") {
            Ok(RangeEnd::Present)
        } else {
            Ok(RangeEnd::Date(s.parse()?))
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(m) => write!(f, "{:02}/{}", m, self.year),
            None => write!(f, "{}", self.year),
        }
    }
}

impl fmt::Display for RangeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeEnd::Date(d) => d.fmt(f),
            RangeEnd::Present => write!(f, "Present"),
        }
    }
}

/// A date range exactly as authored in the content file.
///
/// The raw strings are kept for display so the page shows dates the way the
/// author wrote them; [`DateRange::parsed`] gives the typed form used for
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// Parse both endpoints.
    pub fn parsed(&self) -> Result<(YearMonth, RangeEnd), DateError> {
        Ok((self.start.parse()?, self.end.parse()?))
    }

    /// Check that the range is well formed and ordered.
    ///
    /// A range is ordered when the start does not fall after the end. When
    /// either endpoint omits the month, only the years are compared.
    pub fn check_ordered(&self) -> Result<(), String> {
        let (start, end) = self.parsed().map_err(|e| e.to_string())?;

        let end = match end {
            RangeEnd::Present => return Ok(()),
            RangeEnd::Date(d) => d,
        };

        let out_of_order = match (start.month, end.month) {
            (Some(sm), Some(em)) => (start.year, sm) > (end.year, em),
            _ => start.year > end.year,
        };

        if out_of_order {
            return Err(format!(
                "start {} falls after end {}",
                self.start.trim(),
                self.end.trim()
            ));
        }

        Ok(())
    }

    /// Display label, e.g. `"08/2020 - 05/2023"` or `"2023 - Present"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start.trim(), self.end.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_only() {
        let ym: YearMonth = "2023".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2023, month: None });
    }

    #[test]
    fn parses_month_year() {
        let ym: YearMonth = "08/2020".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2020, month: Some(8) });
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "last summer".parse::<YearMonth>(),
            Err(DateError::Malformed(_))
        ));
        assert!(matches!("20".parse::<YearMonth>(), Err(DateError::Malformed(_))));
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert!(matches!(
            "13/2020".parse::<YearMonth>(),
            Err(DateError::MonthOutOfRange(_))
        ));
        assert!(matches!(
            "00/2020".parse::<YearMonth>(),
            Err(DateError::MonthOutOfRange(_))
        ));
    }

    #[test]
    fn parses_present_case_insensitive() {
        assert_eq!("Present".parse::<RangeEnd>().unwrap(), RangeEnd::Present);
        assert_eq!("present".parse::<RangeEnd>().unwrap(), RangeEnd::Present);
    }

    #[test]
    fn ordered_range_passes() {
        let range = DateRange {
            start: "08/2020".into(),
            end: "05/2023".into(),
        };
        assert!(range.check_ordered().is_ok());
    }

    #[test]
    fn present_end_always_passes() {
        let range = DateRange {
            start: "2023".into(),
            end: "present".into(),
        };
        assert!(range.check_ordered().is_ok());
    }

    #[test]
    fn reversed_range_fails() {
        let range = DateRange {
            start: "05/2023".into(),
            end: "08/2020".into(),
        };
        assert!(range.check_ordered().is_err());
    }

    #[test]
    fn year_only_compares_whole_years() {
        // Same year with one bare endpoint is not out of order.
        let range = DateRange {
            start: "11/2023".into(),
            end: "2023".into(),
        };
        assert!(range.check_ordered().is_ok());
    }

    #[test]
    fn labels_keep_authored_form() {
        let range = DateRange {
            start: "08/2020".into(),
            end: "Present".into(),
        };
        assert_eq!(range.label(), "08/2020 - Present");
    }
}
