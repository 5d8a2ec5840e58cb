use crate::domain::CleanReview;
use crate::error::{PipelineError, Result};

use super::StagedReview;

/// Check that every required column is present in a header row.
/// Extra columns are ignored; the first missing one is reported.
pub fn require_columns<'a, I>(headers: I, required: &[&str], file: &str) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let present: Vec<&str> = headers.into_iter().map(str::trim).collect();
    match required.iter().find(|column| !present.contains(column)) {
        Some(column) => Err(PipelineError::MissingColumn {
            column: column.to_string(),
            file: file.to_string(),
        }),
        None => Ok(()),
    }
}

/// Map a staged row onto the public clean schema. Field order of
/// `CleanReview` is the published column order.
pub fn rename(id: usize, staged: StagedReview) -> CleanReview {
    CleanReview {
        id,
        verified: staged.verified,
        date_review: staged.review_date.date,
        day_review: staged.review_date.day,
        month_review: staged.review_date.month_name,
        month_review_num: staged.review_date.month_num,
        year_review: staged.review_date.year,
        name: staged.customer_name,
        month_fly: staged.flight_month.month_name,
        month_fly_num: staged.flight_month.month_num,
        year_fly: staged.flight_month.year,
        month_year_fly: staged.flight_month.month_year,
        country: staged.country,
        aircraft: staged.aircraft,
        traveller_type: staged.type_of_traveller,
        seat_type: staged.seat_type,
        route: staged.route,
        seat_comfort: staged.seat_comfort,
        cabin_serv: staged.cabin_staff_service,
        food: staged.food_beverages,
        ground_service: staged.ground_service,
        wifi: staged.wifi_connectivity,
        money_value: staged.value_for_money,
        recommended: staged.recommended,
        review: staged.review,
    }
}
