use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub mod manifest;

pub use manifest::{RunKind, RunManifest};

/// One scraped review card, exactly as the scraper wrote it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReview {
    pub dates: Option<String>,
    pub customer_names: Option<String>,
    pub countries: Option<String>,
    pub review_bodies: Option<String>,
    #[serde(rename = "Date Flown")]
    pub date_flown: Option<String>,
    #[serde(rename = "Aircraft")]
    pub aircraft: Option<String>,
    #[serde(rename = "Type Of Traveller")]
    pub type_of_traveller: Option<String>,
    #[serde(rename = "Seat Type")]
    pub seat_type: Option<String>,
    #[serde(rename = "Route")]
    pub route: Option<String>,
    #[serde(rename = "Seat Comfort")]
    pub seat_comfort: Option<String>,
    #[serde(rename = "Cabin Staff Service")]
    pub cabin_staff_service: Option<String>,
    #[serde(rename = "Food & Beverages")]
    pub food_beverages: Option<String>,
    #[serde(rename = "Ground Service")]
    pub ground_service: Option<String>,
    #[serde(rename = "Wifi & Connectivity")]
    pub wifi_connectivity: Option<String>,
    #[serde(rename = "Value For Money")]
    pub value_for_money: Option<String>,
    #[serde(rename = "Recommended")]
    pub recommended: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanReview {
    pub id: usize,
    pub verified: bool,
    pub date_review: Option<NaiveDate>,
    pub day_review: Option<u32>,
    pub month_review: Option<String>,
    pub month_review_num: Option<u32>,
    pub year_review: Option<i32>,
    pub name: Option<String>,
    pub month_fly: Option<String>,
    pub month_fly_num: Option<u32>,
    pub year_fly: Option<i32>,
    pub month_year_fly: Option<MonthYear>,
    pub country: Option<String>,
    pub aircraft: Option<String>,
    #[serde(rename = "type")]
    pub traveller_type: Option<String>,
    pub seat_type: Option<String>,
    pub route: Option<String>,
    pub seat_comfort: Option<i32>,
    pub cabin_serv: Option<i32>,
    pub food: Option<i32>,
    pub ground_service: Option<i32>,
    pub wifi: Option<i32>,
    pub money_value: Option<i32>,
    pub recommended: Option<String>,
    pub review: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedReview {
    pub id: usize,
    pub date_review: Option<NaiveDate>,
    pub day_review: Option<u32>,
    pub month_review: Option<String>,
    pub month_review_num: Option<u32>,
    pub year_review: Option<i32>,
    pub verified: bool,
    pub name: Option<String>,
    pub month_fly: Option<String>,
    pub month_fly_num: Option<u32>,
    pub year_fly: Option<i32>,
    pub month_year_fly: Option<MonthYear>,
    pub country: Option<String>,
    pub aircraft: Option<String>,
    pub aircraft_1: Option<String>,
    pub aircraft_2: Option<String>,
    #[serde(rename = "type")]
    pub traveller_type: Option<String>,
    pub seat_type: Option<String>,
    pub route: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub transit: Option<String>,
    pub seat_comfort: Option<i32>,
    pub cabin_serv: Option<i32>,
    pub food: Option<i32>,
    pub ground_service: Option<i32>,
    pub wifi: Option<i32>,
    pub money_value: Option<i32>,
    pub score: Option<f64>,
    pub experience: Experience,
    pub recommended: Option<bool>,
    pub review: Option<String>,
}

/// Customer experience tier derived from the value-for-money rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    Poor,
    Fair,
    Good,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Experience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Poor => "Poor",
            Experience::Fair => "Fair",
            Experience::Good => "Good",
            Experience::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar month. The day of month is never known for a flight, so only
/// year and month are kept. Rendered as `MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear {
    pub year: i32,
    pub month: u32,
}

impl MonthYear {
    /// Keep only the month granularity of a date whose day is a placeholder.
    pub fn from_placeholder_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.month, self.year)
    }
}

impl FromStr for MonthYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, year) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("expected MM-YYYY, got '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in '{}'", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in '{}'", s))?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::from_placeholder_date)
            .ok_or_else(|| format!("no such month '{}'", s))
    }
}

impl Serialize for MonthYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
