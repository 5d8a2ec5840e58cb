use serde::{Deserialize, Serialize};

use crate::domain::ProcessedReview;

/// One processed row flattened into text for semantic-search ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDocument {
    pub page_content: String,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// File the row was read from
    pub source: String,
    /// Position of the row in that file
    pub row_index: usize,
}

fn text<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn flag(value: bool) -> String {
    let rendered = if value { "True" } else { "False" };
    rendered.to_string()
}

/// `(column, rendered value)` pairs in processed column order.
pub fn row_cells(review: &ProcessedReview) -> Vec<(&'static str, String)> {
    vec![
        ("id", review.id.to_string()),
        ("date_review", text(&review.date_review)),
        ("day_review", text(&review.day_review)),
        ("month_review", text(&review.month_review)),
        ("month_review_num", text(&review.month_review_num)),
        ("year_review", text(&review.year_review)),
        ("verified", flag(review.verified)),
        ("name", text(&review.name)),
        ("month_fly", text(&review.month_fly)),
        ("month_fly_num", text(&review.month_fly_num)),
        ("year_fly", text(&review.year_fly)),
        ("month_year_fly", text(&review.month_year_fly)),
        ("country", text(&review.country)),
        ("aircraft", text(&review.aircraft)),
        ("aircraft_1", text(&review.aircraft_1)),
        ("aircraft_2", text(&review.aircraft_2)),
        ("type", text(&review.traveller_type)),
        ("seat_type", text(&review.seat_type)),
        ("route", text(&review.route)),
        ("origin", text(&review.origin)),
        ("destination", text(&review.destination)),
        ("transit", text(&review.transit)),
        ("seat_comfort", text(&review.seat_comfort)),
        ("cabin_serv", text(&review.cabin_serv)),
        ("food", text(&review.food)),
        ("ground_service", text(&review.ground_service)),
        ("wifi", text(&review.wifi)),
        ("money_value", text(&review.money_value)),
        ("score", review.score.map(|s| format!("{:?}", s)).unwrap_or_default()),
        ("experience", review.experience.to_string()),
        ("recommended", review.recommended.map(flag).unwrap_or_default()),
        ("review", text(&review.review)),
    ]
}

/// Flatten a row into `"col: value"` pairs joined by spaces.
pub fn to_document(row_index: usize, review: &ProcessedReview, source: &str) -> ReviewDocument {
    let page_content = row_cells(review)
        .into_iter()
        .map(|(column, value)| format!("{}: {}", column, value))
        .collect::<Vec<_>>()
        .join(" ");

    ReviewDocument {
        page_content,
        metadata: DocumentMetadata {
            source: source.to_string(),
            row_index,
        },
    }
}

pub fn to_documents(reviews: &[ProcessedReview], source: &str) -> Vec<ReviewDocument> {
    reviews
        .iter()
        .enumerate()
        .map(|(idx, review)| to_document(idx, review, source))
        .collect()
}
