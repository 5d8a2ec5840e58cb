use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ProcessedReview;

/// Headline KPIs shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneralMetrics {
    pub recommendation_percentage: f64,
    pub average_money_value: f64,
    pub average_service_score: f64,
    pub review_count: usize,
}

/// Relative change (percent) of the averages and absolute change of the count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsChange {
    pub recommendation_percentage: f64,
    pub average_money_value: f64,
    pub average_service_score: f64,
    pub review_count: i64,
}

/// What the current month is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    PreviousMonth,
    PreviousYear,
    AllTime,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Comparison::PreviousMonth => "previous-month",
            Comparison::PreviousYear => "previous-year",
            Comparison::AllTime => "all-time",
        };
        f.write_str(label)
    }
}

impl FromStr for Comparison {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "-").as_str() {
            "previous-month" => Ok(Comparison::PreviousMonth),
            "previous-year" => Ok(Comparison::PreviousYear),
            "all-time" => Ok(Comparison::AllTime),
            other => Err(format!(
                "unknown comparison '{}' (expected previous-month, previous-year or all-time)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub as_of: NaiveDate,
    pub comparison: Comparison,
    pub overall: GeneralMetrics,
    pub current_month: GeneralMetrics,
    pub baseline: GeneralMetrics,
    pub change: MetricsChange,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean<I: Iterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// KPIs over a set of rows. Means skip nulls; an empty mean reports 0.
pub fn general_metrics<'a, I>(rows: I) -> GeneralMetrics
where
    I: IntoIterator<Item = &'a ProcessedReview>,
{
    let rows: Vec<&ProcessedReview> = rows.into_iter().collect();

    let recommended = mean(
        rows.iter()
            .filter_map(|r| r.recommended)
            .map(|r| if r { 1.0 } else { 0.0 }),
    );
    let money = mean(rows.iter().filter_map(|r| r.money_value).map(f64::from));
    let score = mean(rows.iter().filter_map(|r| r.score));

    GeneralMetrics {
        recommendation_percentage: round2(recommended.unwrap_or(0.0) * 100.0),
        average_money_value: round2(money.unwrap_or(0.0)),
        average_service_score: round2(score.unwrap_or(0.0)),
        review_count: rows.len(),
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn in_range(review: &ProcessedReview, start: NaiveDate, end_exclusive: NaiveDate) -> bool {
    review
        .date_review
        .map(|d| d >= start && d < end_exclusive)
        .unwrap_or(false)
}

fn month_window(start: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = start.checked_add_months(Months::new(1)).unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Rows reviewed in the calendar month of `as_of`.
pub fn current_month(rows: &[ProcessedReview], as_of: NaiveDate) -> Vec<&ProcessedReview> {
    let (start, end) = month_window(month_start(as_of));
    rows.iter().filter(|r| in_range(r, start, end)).collect()
}

/// Rows reviewed in the calendar month before `as_of`.
pub fn previous_month(rows: &[ProcessedReview], as_of: NaiveDate) -> Vec<&ProcessedReview> {
    let Some(start) = month_start(as_of).checked_sub_months(Months::new(1)) else {
        return Vec::new();
    };
    let (start, end) = month_window(start);
    rows.iter().filter(|r| in_range(r, start, end)).collect()
}

/// Rows reviewed in the same calendar month one year before `as_of`.
pub fn previous_year_month(rows: &[ProcessedReview], as_of: NaiveDate) -> Vec<&ProcessedReview> {
    let Some(start) = month_start(as_of).checked_sub_months(Months::new(12)) else {
        return Vec::new();
    };
    let (start, end) = month_window(start);
    rows.iter().filter(|r| in_range(r, start, end)).collect()
}

fn relative_change(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (current - baseline) / baseline * 100.0
    }
}

/// Current-month KPIs against the chosen baseline.
pub fn compare(
    rows: &[ProcessedReview],
    as_of: NaiveDate,
    comparison: Comparison,
) -> MetricsReport {
    let overall = general_metrics(rows);
    let current = general_metrics(current_month(rows, as_of));
    let baseline = match comparison {
        Comparison::PreviousMonth => general_metrics(previous_month(rows, as_of)),
        Comparison::PreviousYear => general_metrics(previous_year_month(rows, as_of)),
        Comparison::AllTime => overall,
    };

    let change = MetricsChange {
        recommendation_percentage: relative_change(
            current.recommendation_percentage,
            baseline.recommendation_percentage,
        ),
        average_money_value: relative_change(
            current.average_money_value,
            baseline.average_money_value,
        ),
        average_service_score: relative_change(
            current.average_service_score,
            baseline.average_service_score,
        ),
        review_count: current.review_count as i64 - baseline.review_count as i64,
    };

    MetricsReport {
        as_of,
        comparison,
        overall,
        current_month: current,
        baseline,
        change,
    }
}
