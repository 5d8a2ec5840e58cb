//! Feature engineering over the clean table: route legs, aircraft codes,
//! service score, experience tier and the recommended flag.

pub mod aircraft;
pub mod coerce;
pub mod route;
pub mod score;

use crate::domain::{CleanReview, ProcessedReview};

/// Derive every feature for one clean row and lay it out in processed
/// column order.
pub fn enrich_review(clean: CleanReview) -> ProcessedReview {
    let score = score::service_score(&[
        clean.seat_comfort,
        clean.cabin_serv,
        clean.food,
        clean.ground_service,
        clean.wifi,
    ]);
    let route = route::parse_route(clean.route.as_deref());
    let codes = aircraft::normalize_aircraft(clean.aircraft.as_deref());
    let experience = score::experience(clean.money_value);
    let recommended = coerce::yes_no(clean.recommended.as_deref());

    ProcessedReview {
        id: clean.id,
        date_review: clean.date_review,
        day_review: clean.day_review,
        month_review: clean.month_review,
        month_review_num: clean.month_review_num,
        year_review: clean.year_review,
        verified: clean.verified,
        name: clean.name,
        month_fly: clean.month_fly,
        month_fly_num: clean.month_fly_num,
        year_fly: clean.year_fly,
        month_year_fly: clean.month_year_fly,
        country: clean.country,
        aircraft: clean.aircraft,
        aircraft_1: codes.aircraft_1,
        aircraft_2: codes.aircraft_2,
        traveller_type: clean.traveller_type,
        seat_type: clean.seat_type,
        route: clean.route,
        origin: route.origin,
        destination: route.destination,
        transit: route.transit,
        seat_comfort: clean.seat_comfort,
        cabin_serv: clean.cabin_serv,
        food: clean.food,
        ground_service: clean.ground_service,
        wifi: clean.wifi,
        money_value: clean.money_value,
        score,
        experience,
        recommended,
        review: clean.review,
    }
}

/// Enrich the whole clean table, preserving row order.
pub fn enrich_reviews(clean: Vec<CleanReview>) -> Vec<ProcessedReview> {
    clean.into_iter().map(enrich_review).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PROCESSED_COLUMNS;
    use crate::domain::Experience;

    fn clean_row(id: usize) -> CleanReview {
        CleanReview {
            id,
            verified: true,
            date_review: None,
            day_review: None,
            month_review: None,
            month_review_num: None,
            year_review: None,
            name: Some("Jane Doe".to_string()),
            month_fly: None,
            month_fly_num: None,
            year_fly: None,
            month_year_fly: None,
            country: None,
            aircraft: Some("Boeing 777 / A320".to_string()),
            traveller_type: None,
            seat_type: None,
            route: Some("LHR-CDG".to_string()),
            seat_comfort: None,
            cabin_serv: None,
            food: None,
            ground_service: None,
            wifi: None,
            money_value: Some(3),
            recommended: Some("no".to_string()),
            review: Some("Fine".to_string()),
        }
    }

    #[test]
    fn test_enrich_review_features() {
        let processed = enrich_review(clean_row(7));
        assert_eq!(processed.id, 7);
        assert_eq!(processed.origin.as_deref(), Some("London Heathrow"));
        assert_eq!(processed.destination.as_deref(), Some("CDG"));
        assert_eq!(processed.transit, None);
        assert_eq!(processed.aircraft_1.as_deref(), Some("B777"));
        assert_eq!(processed.aircraft_2.as_deref(), Some("A320"));
        assert_eq!(processed.score, None);
        assert_eq!(processed.experience, Experience::Fair);
        assert_eq!(processed.recommended, Some(false));
    }

    #[test]
    fn test_processed_header_matches_published_order() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(enrich_review(clean_row(0))).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().next().unwrap(), PROCESSED_COLUMNS.join(","));
    }
}
