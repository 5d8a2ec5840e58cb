use chrono::NaiveDate;
use thiserror::Error;

use crate::constants::{month_number, MONTH_NAMES};
use crate::domain::MonthYear;

/// Why a review date string could not be turned into a calendar date.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateParseError {
    #[error("expected '<day><suffix> <Month> <Year>', found {found} token(s) in '{input}'")]
    TokenCount { input: String, found: usize },

    #[error("'{month}' in '{input}' is not a full month name")]
    UnknownMonth { input: String, month: String },

    #[error("'{input}' is not a valid calendar date: {source}")]
    Invalid {
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },
}

/// Review date plus the components it was assembled from.
/// Components survive even when the assembled date does not parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDate {
    pub date: Option<NaiveDate>,
    pub day: Option<u32>,
    pub month_name: Option<String>,
    pub month_num: Option<u32>,
    pub year: Option<i32>,
}

/// Month and year a flight was taken. The day is unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightMonth {
    pub month_name: Option<String>,
    pub month_num: Option<u32>,
    pub year: Option<i32>,
    pub month_year: Option<MonthYear>,
}

/// Drop the two-character ordinal suffix of a day token ("15th" -> "15").
fn strip_ordinal(day: &str) -> &str {
    let cut = day
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &day[..cut]
}

/// Parse `"15th March 2024"` into a date.
pub fn parse_review_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(DateParseError::TokenCount {
            input: raw.to_string(),
            found: tokens.len(),
        });
    }

    if !MONTH_NAMES.iter().any(|m| m.eq_ignore_ascii_case(tokens[1])) {
        return Err(DateParseError::UnknownMonth {
            input: raw.to_string(),
            month: tokens[1].to_string(),
        });
    }

    let candidate = format!("{} {} {}", strip_ordinal(tokens[0]), tokens[1], tokens[2]);
    NaiveDate::parse_from_str(&candidate, "%d %B %Y").map_err(|source| DateParseError::Invalid {
        input: raw.to_string(),
        source,
    })
}

/// Decompose a review date string. Never fails; unparseable input yields nulls.
pub fn normalize_review_date(raw: Option<&str>) -> ReviewDate {
    let Some(raw) = raw else {
        return ReviewDate::default();
    };

    let mut tokens = raw.split_whitespace();
    let day = tokens.next().and_then(|t| strip_ordinal(t).parse().ok());
    let month_name = tokens.next().map(str::to_string);
    let year = tokens.next().and_then(|t| t.parse().ok());
    let month_num = month_name.as_deref().and_then(month_number);

    let date = match parse_review_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!("Review date left null: {}", e);
            None
        }
    };

    ReviewDate {
        date,
        day,
        month_name,
        month_num,
        year,
    }
}

/// Parse `"March 2024"` into a month-granularity value.
pub fn normalize_flight_month(raw: Option<&str>) -> FlightMonth {
    let Some(raw) = raw else {
        return FlightMonth::default();
    };

    let mut tokens = raw.split_whitespace();
    let month_name = tokens.next().map(str::to_string);
    let year_text = tokens.next();
    let month_num = month_name.as_deref().and_then(month_number);

    let month_year = match (year_text, month_num) {
        (Some(year), Some(month)) => {
            NaiveDate::parse_from_str(&format!("{}-{:02}-01", year, month), "%Y-%m-%d")
                .ok()
                .map(MonthYear::from_placeholder_date)
        }
        _ => None,
    };

    FlightMonth {
        month_name,
        month_num,
        year: year_text.and_then(|y| y.parse().ok()),
        month_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_review_date_with_suffixes() {
        assert_eq!(
            parse_review_date("15th March 2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(
            parse_review_date("1st January 2023").unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(
            parse_review_date("22nd June 2019").unwrap(),
            NaiveDate::from_ymd_opt(2019, 6, 22).unwrap()
        );
        assert_eq!(
            parse_review_date("3rd October 2020").unwrap(),
            NaiveDate::from_ymd_opt(2020, 10, 3).unwrap()
        );
    }

    #[test]
    fn test_abbreviated_month_is_rejected() {
        assert!(matches!(
            parse_review_date("15th Mar 2024"),
            Err(DateParseError::UnknownMonth { ref month, .. }) if month == "Mar"
        ));
        let parsed = normalize_review_date(Some("15th Mar 2024"));
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.month_num, None);
        assert_eq!(parsed.day, Some(15));
    }

    #[test]
    fn test_month_name_case_is_ignored() {
        assert_eq!(
            parse_review_date("15th MARCH 2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_review_date_errors() {
        assert!(matches!(
            parse_review_date("March 2024"),
            Err(DateParseError::TokenCount { found: 2, .. })
        ));
        assert!(matches!(
            parse_review_date("15th Marchember 2024"),
            Err(DateParseError::UnknownMonth { .. })
        ));
        assert!(matches!(
            parse_review_date("31st February 2024"),
            Err(DateParseError::Invalid { .. })
        ));
    }

    #[test]
    fn test_normalize_review_date_components() {
        let parsed = normalize_review_date(Some("15th March 2024"));
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parsed.day, Some(15));
        assert_eq!(parsed.month_name.as_deref(), Some("March"));
        assert_eq!(parsed.month_num, Some(3));
        assert_eq!(parsed.year, Some(2024));
    }

    #[test]
    fn test_normalize_review_date_recovers_to_null() {
        let parsed = normalize_review_date(Some("yesterday"));
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.month_num, None);

        assert_eq!(normalize_review_date(None), ReviewDate::default());
        assert_eq!(normalize_review_date(Some("")).date, None);
    }

    #[test]
    fn test_normalize_flight_month() {
        let flown = normalize_flight_month(Some("March 2024"));
        assert_eq!(flown.month_name.as_deref(), Some("March"));
        assert_eq!(flown.month_num, Some(3));
        assert_eq!(flown.year, Some(2024));
        assert_eq!(flown.month_year, Some(MonthYear { year: 2024, month: 3 }));
        assert_eq!(flown.month_year.unwrap().to_string(), "03-2024");
    }

    #[test]
    fn test_normalize_flight_month_unmapped() {
        let flown = normalize_flight_month(Some("Sept 2024"));
        assert_eq!(flown.month_num, None);
        assert_eq!(flown.year, Some(2024));
        assert_eq!(flown.month_year, None);

        let flown = normalize_flight_month(Some("June"));
        assert_eq!(flown.month_num, Some(6));
        assert_eq!(flown.month_year, None);

        assert_eq!(normalize_flight_month(None), FlightMonth::default());
    }
}
