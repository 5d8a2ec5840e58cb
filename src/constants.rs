/// Column names of the raw scraper output.
/// These are a fixed contract with the upstream review-card scraper.
pub const RAW_DATES: &str = "dates";
pub const RAW_CUSTOMER_NAMES: &str = "customer_names";
pub const RAW_COUNTRIES: &str = "countries";
pub const RAW_REVIEW_BODIES: &str = "review_bodies";
pub const RAW_DATE_FLOWN: &str = "Date Flown";
pub const RAW_AIRCRAFT: &str = "Aircraft";
pub const RAW_TYPE_OF_TRAVELLER: &str = "Type Of Traveller";
pub const RAW_SEAT_TYPE: &str = "Seat Type";
pub const RAW_ROUTE: &str = "Route";
pub const RAW_SEAT_COMFORT: &str = "Seat Comfort";
pub const RAW_CABIN_STAFF_SERVICE: &str = "Cabin Staff Service";
pub const RAW_FOOD_BEVERAGES: &str = "Food & Beverages";
pub const RAW_GROUND_SERVICE: &str = "Ground Service";
pub const RAW_WIFI: &str = "Wifi & Connectivity";
pub const RAW_VALUE_FOR_MONEY: &str = "Value For Money";
pub const RAW_RECOMMENDED: &str = "Recommended";

/// Every raw column the pipeline reads. A file missing any of them breaks the
/// scraper contract and aborts the run.
pub const REQUIRED_RAW_COLUMNS: [&str; 16] = [
    RAW_DATES,
    RAW_CUSTOMER_NAMES,
    RAW_COUNTRIES,
    RAW_REVIEW_BODIES,
    RAW_DATE_FLOWN,
    RAW_AIRCRAFT,
    RAW_TYPE_OF_TRAVELLER,
    RAW_SEAT_TYPE,
    RAW_ROUTE,
    RAW_SEAT_COMFORT,
    RAW_CABIN_STAFF_SERVICE,
    RAW_FOOD_BEVERAGES,
    RAW_GROUND_SERVICE,
    RAW_WIFI,
    RAW_VALUE_FOR_MONEY,
    RAW_RECOMMENDED,
];

/// Public column order of the clean table.
pub const CLEAN_COLUMNS: [&str; 25] = [
    "id",
    "verified",
    "date_review",
    "day_review",
    "month_review",
    "month_review_num",
    "year_review",
    "name",
    "month_fly",
    "month_fly_num",
    "year_fly",
    "month_year_fly",
    "country",
    "aircraft",
    "type",
    "seat_type",
    "route",
    "seat_comfort",
    "cabin_serv",
    "food",
    "ground_service",
    "wifi",
    "money_value",
    "recommended",
    "review",
];

/// Public column order of the processed table consumed by the dashboard and
/// the document indexer.
pub const PROCESSED_COLUMNS: [&str; 32] = [
    "id",
    "date_review",
    "day_review",
    "month_review",
    "month_review_num",
    "year_review",
    "verified",
    "name",
    "month_fly",
    "month_fly_num",
    "year_fly",
    "month_year_fly",
    "country",
    "aircraft",
    "aircraft_1",
    "aircraft_2",
    "type",
    "seat_type",
    "route",
    "origin",
    "destination",
    "transit",
    "seat_comfort",
    "cabin_serv",
    "food",
    "ground_service",
    "wifi",
    "money_value",
    "score",
    "experience",
    "recommended",
    "review",
];

/// English month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Map a full English month name to 1..=12. Matching is exact.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u32 + 1)
}

pub const LONDON_HEATHROW: &str = "London Heathrow";
pub const LONDON_GATWICK: &str = "London Gatwick";

/// Known spellings of the two London hubs as they show up in route text.
/// Lookups are exact whole-value matches.
pub const AIRPORT_SYNONYMS: [(&str, &str); 10] = [
    ("LHR", LONDON_HEATHROW),
    ("Heathrow", LONDON_HEATHROW),
    ("London Heatrow", LONDON_HEATHROW),
    ("London-Heathrow", LONDON_HEATHROW),
    ("London heathrow", LONDON_HEATHROW),
    ("London Heaathrow", LONDON_HEATHROW),
    ("London UK (Heathrow)", LONDON_HEATHROW),
    ("Heathrow (London)", LONDON_HEATHROW),
    ("Gatwick", LONDON_GATWICK),
    ("LGW", LONDON_GATWICK),
];

/// Canonical airport name for a known alternate spelling.
pub fn canonical_airport(name: &str) -> Option<&'static str> {
    AIRPORT_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
}

/// Source label attached to every exported document.
pub const DOCUMENT_SOURCE: &str = "processed_data.csv";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_number_is_exact() {
        assert_eq!(month_number("January"), Some(1));
        assert_eq!(month_number("December"), Some(12));
        assert_eq!(month_number("march"), None);
        assert_eq!(month_number("Mar"), None);
    }

    #[test]
    fn test_canonical_airport() {
        assert_eq!(canonical_airport("LHR"), Some(LONDON_HEATHROW));
        assert_eq!(canonical_airport("Heathrow (London)"), Some(LONDON_HEATHROW));
        assert_eq!(canonical_airport("LGW"), Some(LONDON_GATWICK));
        assert_eq!(canonical_airport("CDG"), None);
    }
}
