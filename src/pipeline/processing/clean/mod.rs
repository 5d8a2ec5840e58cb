//! Cleaning stages: field splitting, date normalization, id assignment and
//! the rename onto the public clean schema.

pub mod dates;
pub mod identity;
pub mod schema;
pub mod split;

use crate::domain::{CleanReview, RawReview};

use dates::{FlightMonth, ReviewDate};

/// A review after splitting and date parsing, before it has an id.
/// Field names follow the scraper's vocabulary; `schema::rename` maps them
/// onto the public names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedReview {
    pub verified: bool,
    pub review: Option<String>,
    pub review_date: ReviewDate,
    pub flight_month: FlightMonth,
    pub customer_name: Option<String>,
    pub country: Option<String>,
    pub aircraft: Option<String>,
    pub type_of_traveller: Option<String>,
    pub seat_type: Option<String>,
    pub route: Option<String>,
    pub seat_comfort: Option<i32>,
    pub cabin_staff_service: Option<i32>,
    pub food_beverages: Option<i32>,
    pub ground_service: Option<i32>,
    pub wifi_connectivity: Option<i32>,
    pub value_for_money: Option<i32>,
    pub recommended: Option<String>,
}

/// Split composite fields and parse both dates for one raw record.
pub fn stage_review(raw: RawReview) -> StagedReview {
    let body = split::split_review_body(raw.review_bodies.as_deref());

    StagedReview {
        verified: body.verified,
        review: body.review,
        review_date: dates::normalize_review_date(raw.dates.as_deref()),
        flight_month: dates::normalize_flight_month(raw.date_flown.as_deref()),
        customer_name: split::clean_text(raw.customer_names.as_deref()),
        country: split::clean_country(raw.countries.as_deref()),
        aircraft: split::clean_text(raw.aircraft.as_deref()),
        type_of_traveller: split::clean_text(raw.type_of_traveller.as_deref()),
        seat_type: split::clean_text(raw.seat_type.as_deref()),
        route: split::clean_text(raw.route.as_deref()),
        seat_comfort: split::parse_rating(raw.seat_comfort.as_deref()),
        cabin_staff_service: split::parse_rating(raw.cabin_staff_service.as_deref()),
        food_beverages: split::parse_rating(raw.food_beverages.as_deref()),
        ground_service: split::parse_rating(raw.ground_service.as_deref()),
        wifi_connectivity: split::parse_rating(raw.wifi_connectivity.as_deref()),
        value_for_money: split::parse_rating(raw.value_for_money.as_deref()),
        recommended: split::clean_text(raw.recommended.as_deref()),
    }
}

/// Run every cleaning stage over the whole table. One output row per input row.
pub fn clean_reviews(raw: Vec<RawReview>) -> Vec<CleanReview> {
    let staged: Vec<StagedReview> = raw.into_iter().map(stage_review).collect();
    identity::assign_ids(staged, |s| s.review_date.date)
        .into_iter()
        .map(|(id, staged)| schema::rename(id, staged))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(dates: &str, body: &str) -> RawReview {
        RawReview {
            dates: Some(dates.to_string()),
            customer_names: Some("  Jane Doe ".to_string()),
            countries: Some("(United Kingdom)".to_string()),
            review_bodies: Some(body.to_string()),
            date_flown: Some("February 2024".to_string()),
            aircraft: Some("A320".to_string()),
            type_of_traveller: Some("Solo Leisure".to_string()),
            seat_type: Some("Economy Class".to_string()),
            route: Some("London to Paris".to_string()),
            seat_comfort: Some("4".to_string()),
            cabin_staff_service: Some("5.0".to_string()),
            food_beverages: None,
            ground_service: Some("3".to_string()),
            wifi_connectivity: None,
            value_for_money: Some("4".to_string()),
            recommended: Some("yes".to_string()),
        }
    }

    #[test]
    fn test_stage_review_fields() {
        let staged = stage_review(raw("15th March 2024", "Trip Verified| Great flight"));
        assert!(staged.verified);
        assert_eq!(staged.review.as_deref(), Some("Great flight"));
        assert_eq!(staged.customer_name.as_deref(), Some("Jane Doe"));
        assert_eq!(staged.country.as_deref(), Some("United Kingdom"));
        assert_eq!(staged.review_date.date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(staged.flight_month.month_num, Some(2));
        assert_eq!(staged.cabin_staff_service, Some(5));
        assert_eq!(staged.food_beverages, None);
    }

    #[test]
    fn test_clean_reviews_keeps_every_row() {
        let input = vec![
            raw("1st March 2024", "a"),
            raw("not a date", "b"),
            raw("20th March 2024", "c"),
        ];
        let clean = clean_reviews(input);
        assert_eq!(clean.len(), 3);

        let ids: Vec<usize> = clean.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        let reviews: Vec<&str> = clean.iter().map(|r| r.review.as_deref().unwrap()).collect();
        assert_eq!(reviews, vec!["c", "a", "b"]);
        assert_eq!(clean[2].date_review, None);
    }
}
